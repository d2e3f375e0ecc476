use std::error::Error;
use std::fmt;

use super::{Device, Shader};

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const RESOLUTION_UNIFORM: &str = "u_resolution";
pub const COLOR_UNIFORM: &str = "u_color";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    MissingAttribute(&'static str),
    MissingUniform(&'static str),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute(name) => {
                write!(f, "BindingError: program has no active attribute `{name}`")
            }
            Self::MissingUniform(name) => {
                write!(f, "BindingError: program has no active uniform `{name}`")
            }
        }
    }
}

impl Error for BindingError {}

/// Locations of everything the rectangle program reads, looked up once after
/// linking.
#[derive(Debug, Clone)]
pub struct RectBindings<L> {
    pub position: u32,
    pub resolution: L,
    pub color: L,
}

impl<L> RectBindings<L> {
    pub fn resolve<D>(device: &D, shader: &Shader<D::Program>) -> Result<Self, BindingError>
    where
        D: Device<UniformLocation = L>,
    {
        let program = shader.program();
        let position = device
            .get_attrib_location(program, POSITION_ATTRIBUTE)
            .ok_or(BindingError::MissingAttribute(POSITION_ATTRIBUTE))?;
        let resolution = device
            .get_uniform_location(program, RESOLUTION_UNIFORM)
            .ok_or(BindingError::MissingUniform(RESOLUTION_UNIFORM))?;
        let color = device
            .get_uniform_location(program, COLOR_UNIFORM)
            .ok_or(BindingError::MissingUniform(COLOR_UNIFORM))?;

        log::debug!("Resolved bindings: {POSITION_ATTRIBUTE}={position}");
        Ok(Self {
            position,
            resolution,
            color,
        })
    }
}
