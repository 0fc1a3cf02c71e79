//! Command-line front end: generates one tree and logs its mesh statistics.
//!
//! Run:
//! - `cargo run -- --level 6 --angle 25`
//! - `RUST_LOG=debug cargo run -- --arity binary --deterministic`

use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use yggdrasil::config::{BranchArity, GeneratorConfig, JitterMode};
use yggdrasil::gfx::geometry::mesh_bytes;
use yggdrasil::tree::{LogSink, Tree};
use yggdrasil::ui::{TreeControls, HELP_LINES};

#[derive(Parser, Debug)]
#[command(name = "yggdrasil", version, about = "Generate a fractal tree mesh")]
struct Args {
    /// Recursion depth of the tree
    #[arg(short, long, default_value_t = TreeControls::DEFAULT_LEVEL as i64, allow_negative_numbers = true)]
    level: i64,

    /// Angle between a branch and its children, in degrees
    #[arg(short, long, default_value_t = TreeControls::DEFAULT_ANGLE_DEGREES, allow_negative_numbers = true)]
    angle: f32,

    /// Children per branch split
    #[arg(long, value_enum, default_value_t = Arity::Quaternary)]
    arity: Arity,

    /// Seed of the branch length/angle jitter
    #[arg(long, default_value_t = 0, conflicts_with = "deterministic")]
    seed: u64,

    /// Disable jitter: every branch uses its nominal length and angle
    #[arg(long)]
    deterministic: bool,

    /// Clamp level and angle to the interactive slider ranges
    #[arg(long)]
    clamp: bool,

    /// Generate even when the mesh exceeds the memory budget
    #[arg(long)]
    force: bool,
}

/// Largest mesh generated without `--force`
const MESH_BUDGET_BYTES: u128 = 2 << 30;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Arity {
    Binary,
    Quaternary,
}

impl From<Arity> for BranchArity {
    fn from(arity: Arity) -> Self {
        match arity {
            Arity::Binary => BranchArity::Binary,
            Arity::Quaternary => BranchArity::Quaternary,
        }
    }
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        let jitter = if self.deterministic {
            JitterMode::Deterministic
        } else {
            JitterMode::Seeded { seed: self.seed }
        };
        GeneratorConfig::new()
            .with_arity(self.arity.into())
            .with_jitter(jitter)
    }
}

/// Refuse levels whose buffers would not fit the memory budget.
///
/// Negative and out-of-range levels are left for the generator to reject.
fn check_mesh_budget(level: i64, arity: BranchArity, force: bool) -> anyhow::Result<()> {
    let Ok(level) = u32::try_from(level) else {
        return Ok(());
    };

    let (_, slider_max) = TreeControls::LEVEL_RANGE;
    if level as f32 > slider_max {
        warn!("Branch level {level} is above the interactive range (max {slider_max})");
    }

    match mesh_bytes(level, arity) {
        Some(bytes) if bytes <= MESH_BUDGET_BYTES => Ok(()),
        _ if force => {
            warn!("Branch level {level} exceeds the mesh budget, generating anyway");
            Ok(())
        }
        Some(bytes) => bail!(
            "branch level {level} needs {} MiB of mesh buffers, above the {} MiB budget (pass --force to override)",
            bytes >> 20,
            MESH_BUDGET_BYTES >> 20
        ),
        None => bail!("branch level {level} is too deep to size its mesh buffers"),
    }
}

fn main() -> anyhow::Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut tree = Tree::with_config(LogSink::new(), args.config());

    let started = Instant::now();
    if args.clamp {
        for line in HELP_LINES {
            info!("{line}");
        }
        let controls = TreeControls::from_slider_values(args.level as f32, args.angle);
        controls
            .apply(&mut tree)
            .context("failed to generate tree from slider values")?;
    } else {
        check_mesh_budget(args.level, args.arity.into(), args.force)?;
        tree.generate(args.level, cgmath::Deg(args.angle))
            .with_context(|| {
                format!(
                    "failed to generate tree with level {} and angle {} deg",
                    args.level, args.angle
                )
            })?;
    }
    info!(
        "Generation finished in {:.3} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
