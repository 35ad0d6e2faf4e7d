//! ANGLE extension constants missing from the Khronos GL registry.
use crate::gl::types::GLenum;

/// `GL_ANGLE_texture_rectangle` target.
pub const TEXTURE_RECTANGLE: GLenum = 0x84F5;
/// `GL_ANGLE_texture_rectangle` sampler type. Shares its value with desktop `GL_SAMPLER_2D_RECT`.
pub const SAMPLER_2D_RECT: GLenum = 0x8B63;
