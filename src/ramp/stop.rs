use nalgebra_glm::{vec4, Vec4};

/// A single `(color, position)` anchor of a ramp. The alpha channel is
/// always 1.0; ramp strings never carry one.
#[derive(Clone, Copy, Debug)]
pub struct ColorStop {
    color: Vec4,
    position: f32,
}

impl ColorStop {
    pub fn new(r: f32, g: f32, b: f32, position: f32) -> Self {
        Self {
            color: vec4(r, g, b, 1.0),
            position,
        }
    }

    pub fn color(&self) -> &Vec4 {
        &self.color
    }

    pub fn position(&self) -> f32 {
        self.position
    }
}
