//! # Tree
//!
//! A [`Tree`] owns the parameters and mesh of one fractal tree and hands every
//! rebuilt mesh to a [`MeshSink`], the rendering side that uploads it.
//!
//! ```rust
//! use cgmath::Deg;
//! use yggdrasil::tree::Tree;
//!
//! let mut tree = Tree::new(());
//! tree.generate(2, Deg(20.0)).unwrap();
//! assert_eq!(tree.mesh().triangle_count(), 21);
//! ```

use cgmath::{Deg, Rad};
use log::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::gfx::geometry::{generate_branches, BranchParams, MeshBuffer};

/// Consumer of generated meshes, typically a renderer uploading GPU buffers
pub trait MeshSink {
    /// Called with the complete mesh after every successful generation
    fn load(&mut self, mesh: &MeshBuffer);
}

/// Discards meshes
impl MeshSink for () {
    fn load(&mut self, _mesh: &MeshBuffer) {}
}

impl<S: MeshSink + ?Sized> MeshSink for &mut S {
    fn load(&mut self, mesh: &MeshBuffer) {
        (**self).load(mesh)
    }
}

/// Logs statistics about every loaded mesh
#[derive(Debug, Default)]
pub struct LogSink {
    loads: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of meshes received so far
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl MeshSink for LogSink {
    fn load(&mut self, mesh: &MeshBuffer) {
        self.loads += 1;
        info!(
            "Loaded mesh #{}: {} vertices, {} triangles ({} KiB)",
            self.loads,
            mesh.vertex_count(),
            mesh.triangle_count(),
            (mesh.vertex_bytes().len() + mesh.index_bytes().len()) / 1024
        );
        match mesh.bounds() {
            Some(bounds) => info!(
                "Bounds: min {:?}, max {:?}, size {:?}, center {:?}",
                bounds.min,
                bounds.max,
                bounds.size(),
                bounds.center()
            ),
            None => warn!("Loaded an empty mesh"),
        }
    }
}

/// A regenerable fractal tree bound to a mesh sink
pub struct Tree<S: MeshSink> {
    sink: S,
    config: GeneratorConfig,
    params: Option<BranchParams>,
    mesh: MeshBuffer,
}

impl<S: MeshSink> Tree<S> {
    /// Create an empty tree using the default generator configuration
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, GeneratorConfig::default())
    }

    pub fn with_config(sink: S, config: GeneratorConfig) -> Self {
        Self {
            sink,
            config,
            params: None,
            mesh: MeshBuffer::new(),
        }
    }

    /// Create a tree and generate it right away
    pub fn new_generated<A: Into<Rad<f32>>>(
        sink: S,
        config: GeneratorConfig,
        branch_level: i64,
        branch_angle: A,
    ) -> Result<Self> {
        let mut tree = Self::with_config(sink, config);
        tree.generate(branch_level, branch_angle)?;
        Ok(tree)
    }

    /// Rebuild the mesh from scratch and hand it to the sink.
    ///
    /// Invalid parameters are rejected before anything changes: the previous
    /// mesh and parameters stay in place and the sink is not called.
    pub fn generate<A: Into<Rad<f32>>>(&mut self, branch_level: i64, branch_angle: A) -> Result<()> {
        let params = BranchParams::new(branch_level, branch_angle)?;
        let mesh = generate_branches(&params, &self.config)?;

        info!(
            "Generated tree: level {}, angle {:.1} deg, {} triangles",
            params.level(),
            Deg::from(params.angle()).0,
            mesh.triangle_count()
        );

        self.mesh = mesh;
        self.params = Some(params);
        self.sink.load(&self.mesh);
        Ok(())
    }

    /// Regenerate with a different configuration, keeping the current parameters
    pub fn set_config(&mut self, config: GeneratorConfig) -> Result<()> {
        self.config = config;
        match self.params {
            Some(params) => self.generate(params.level().into(), params.angle()),
            None => Ok(()),
        }
    }

    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    pub fn params(&self) -> Option<&BranchParams> {
        self.params.as_ref()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
