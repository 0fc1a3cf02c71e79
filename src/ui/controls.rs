// src/ui/controls.rs
//! Parameter controls of the tree demo overlay
//!
//! Slider state is kept independent of any widget toolkit: a frontend draws
//! [`TreeControls::sliders`] and forwards the raw slider values to
//! [`TreeControls::set_level`] and [`TreeControls::set_angle_degrees`], which
//! clamp them and regenerate the tree.

use cgmath::Deg;

use crate::error::Result;
use crate::tree::{MeshSink, Tree};

/// Help text shown above the sliders
pub const HELP_LINES: [&str; 4] = [
    "Press WASD to fly the camera around,",
    "Space/V to go up/down,",
    "& Shift to move faster.",
    "Hold the right mouse button to rotate the camera.",
];

/// A labelled value restricted to `[min, max]`
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    value: f32,
}

impl Slider {
    pub fn new(label: &'static str, min: f32, max: f32, value: f32) -> Self {
        let mut slider = Self {
            label,
            min,
            max,
            value: min,
        };
        slider.set(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Store `value` clamped to the slider range and return what was stored.
    /// NaN leaves the current value unchanged.
    pub fn set(&mut self, value: f32) -> f32 {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
        self.value
    }
}

/// Branch level and angle sliders driving a [`Tree`]
#[derive(Debug, Clone)]
pub struct TreeControls {
    level: Slider,
    angle: Slider,
}

impl TreeControls {
    pub const LEVEL_RANGE: (f32, f32) = (0.0, 10.0);
    pub const ANGLE_RANGE_DEGREES: (f32, f32) = (5.0, 45.0);

    pub const DEFAULT_LEVEL: u32 = 10;
    pub const DEFAULT_ANGLE_DEGREES: f32 = 20.0;

    pub fn new() -> Self {
        Self::with_values(Self::DEFAULT_LEVEL, Self::DEFAULT_ANGLE_DEGREES)
    }

    pub fn with_values(level: u32, angle_degrees: f32) -> Self {
        Self::from_slider_values(level as f32, angle_degrees)
    }

    /// Controls initialized from raw slider values, clamped to their ranges
    pub fn from_slider_values(level: f32, angle_degrees: f32) -> Self {
        let (level_min, level_max) = Self::LEVEL_RANGE;
        let (angle_min, angle_max) = Self::ANGLE_RANGE_DEGREES;
        Self {
            level: Slider::new("Branches level", level_min, level_max, level),
            angle: Slider::new("Branches angle", angle_min, angle_max, angle_degrees),
        }
    }

    /// Current branch level, truncated from the slider value
    pub fn level(&self) -> u32 {
        self.level.value() as u32
    }

    pub fn angle(&self) -> Deg<f32> {
        Deg(self.angle.value())
    }

    pub fn sliders(&self) -> [&Slider; 2] {
        [&self.level, &self.angle]
    }

    /// Generate `tree` from the current slider values
    pub fn apply<S: MeshSink>(&self, tree: &mut Tree<S>) -> Result<()> {
        tree.generate(self.level().into(), self.angle())
    }

    /// Handle a level slider change
    pub fn set_level<S: MeshSink>(&mut self, value: f32, tree: &mut Tree<S>) -> Result<()> {
        let previous = self.level();
        self.level.set(value);
        if self.level() == previous && tree.params().is_some() {
            return Ok(());
        }
        self.apply(tree)
    }

    /// Handle an angle slider change, in degrees
    pub fn set_angle_degrees<S: MeshSink>(&mut self, value: f32, tree: &mut Tree<S>) -> Result<()> {
        self.angle.set(value);
        self.apply(tree)
    }
}

impl Default for TreeControls {
    fn default() -> Self {
        Self::new()
    }
}
