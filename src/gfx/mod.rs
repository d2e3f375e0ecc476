pub mod bindings;
pub mod device;
pub mod resolution;
pub mod shader;
pub mod vertex;

#[cfg(test)]
pub mod testing;

pub use bindings::{BindingError, RectBindings};
pub use device::Device;
pub use resolution::Resolution;
pub use shader::{Shader, ShaderError, ShaderHeader};
pub use vertex::Vertex;

use std::error::Error;
use std::fmt;

/// Anything that can stop the GL setup before the first draw.
#[derive(Debug, Clone, PartialEq)]
pub enum GfxError {
    Shader(ShaderError),
    Binding(BindingError),
    Resource(String),
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shader(e) => write!(f, "{e}"),
            Self::Binding(e) => write!(f, "{e}"),
            Self::Resource(reason) => write!(f, "GfxError: could not allocate {reason}"),
        }
    }
}

impl Error for GfxError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shader(e) => Some(e),
            Self::Binding(e) => Some(e),
            Self::Resource(_) => None,
        }
    }
}

impl From<ShaderError> for GfxError {
    fn from(e: ShaderError) -> Self {
        Self::Shader(e)
    }
}

impl From<BindingError> for GfxError {
    fn from(e: BindingError) -> Self {
        Self::Binding(e)
    }
}
