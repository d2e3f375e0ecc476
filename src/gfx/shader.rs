use std::error::Error;
use std::fmt;

use eframe::glow;
use glam::{Vec2, Vec4};

use super::Device;

pub const RECT_VERTEX_SRC: &str = include_str!("../../Shaders/rect.vs");
pub const RECT_FRAGMENT_SRC: &str = include_str!("../../Shaders/rect.fs");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex shader"),
            Self::Fragment => write!(f, "fragment shader"),
        }
    }
}

/// Lines prepended to every source so the same text builds as GLSL ES 1.00
/// (WebGL 1) and as desktop GLSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderHeader {
    pub version: &'static str,
    pub new_interface: bool,
}

impl ShaderHeader {
    /// WebGL 1 takes GLSL ES 1.00, which needs no `#version` line.
    pub const WEBGL1: Self = Self {
        version: "",
        new_interface: false,
    };

    pub fn apply(&self, source: &str) -> String {
        format!(
            "{}\n#define NEW_SHADER_INTERFACE {}\n{}",
            self.version, self.new_interface as i32, source
        )
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                        Errors Arising when building shaders                                       //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    Create(String),
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create(reason) => write!(f, "ShaderError: could not create GL object: {reason}"),
            Self::Compile { stage, log } => {
                write!(f, "ShaderError: failed to compile {stage}: {log}")
            }
            Self::Link { log } => write!(f, "ShaderError: failed to link program: {log}"),
        }
    }
}

impl Error for ShaderError {}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              Compile and Link                                                     //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Compiles one stage. A shader that fails to compile is deleted before the
/// driver's diagnostic is returned.
pub fn compile_shader<D: Device>(
    device: &D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, ShaderError> {
    let shader = device
        .create_shader(stage.gl_type())
        .map_err(ShaderError::Create)?;
    device.shader_source(shader, source);
    device.compile_shader(shader);

    if device.get_shader_compile_status(shader) {
        return Ok(shader);
    }

    let log = device.get_shader_info_log(shader);
    log::error!("Failed to compile {stage}: {log}");
    device.delete_shader(shader);
    Err(ShaderError::Compile { stage, log })
}

/// Links both stages into a program. The shaders are detached and deleted
/// either way; the program only survives a successful link.
pub fn link_program<D: Device>(
    device: &D,
    vertex: D::Shader,
    fragment: D::Shader,
) -> Result<D::Program, ShaderError> {
    let release_shaders = |program: Option<D::Program>| {
        for shader in [vertex, fragment] {
            if let Some(program) = program {
                device.detach_shader(program, shader);
            }
            device.delete_shader(shader);
        }
    };

    let program = match device.create_program() {
        Ok(program) => program,
        Err(reason) => {
            release_shaders(None);
            return Err(ShaderError::Create(reason));
        }
    };

    device.attach_shader(program, vertex);
    device.attach_shader(program, fragment);
    device.link_program(program);

    let linked = device.get_program_link_status(program);
    release_shaders(Some(program));

    if linked {
        return Ok(program);
    }

    let log = device.get_program_info_log(program);
    log::error!("Failed to link program: {log}");
    device.delete_program(program);
    Err(ShaderError::Link { log })
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                                 Shader Program                                                    //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub enum ShaderUniformTypes<'a> {
    Vec2(&'a Vec2),
    Vec4(&'a Vec4),
}

/// A linked program. `P` is the device's program handle.
#[derive(Debug, Clone, Copy)]
pub struct Shader<P>(P);

impl<P: Copy + fmt::Debug> Shader<P> {
    pub fn from_src<D: Device<Program = P>>(
        device: &D,
        header: ShaderHeader,
        vtx: &str,
        frag: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_shader(device, ShaderStage::Vertex, &header.apply(vtx))?;
        let fragment = match compile_shader(device, ShaderStage::Fragment, &header.apply(frag)) {
            Ok(fragment) => fragment,
            Err(e) => {
                device.delete_shader(vertex);
                return Err(e);
            }
        };

        let program = link_program(device, vertex, fragment)?;
        log::debug!("Linked shader program {program:?}");
        Ok(Self(program))
    }

    pub fn program(&self) -> P {
        self.0
    }

    pub fn set_uniform<D: Device<Program = P>>(
        &self,
        device: &D,
        location: &D::UniformLocation,
        uniform: ShaderUniformTypes,
    ) {
        match uniform {
            ShaderUniformTypes::Vec2(uniform) => {
                device.uniform_2_f32(Some(location), uniform.x, uniform.y);
            }
            ShaderUniformTypes::Vec4(uniform) => {
                device.uniform_4_f32(Some(location), uniform.x, uniform.y, uniform.z, uniform.w);
            }
        }
    }

    pub fn use_program<D: Device<Program = P>>(&self, device: &D) {
        device.use_program(Some(self.0));
    }

    pub fn destroy<D: Device<Program = P>>(&self, device: &D) {
        device.delete_program(self.0);
    }
}
