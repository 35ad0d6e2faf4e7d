//! The EGL constants consumed by [`crate::egl_gl`].
//!
//! Only the handful of texture related values are needed, so they are declared here
//! rather than generating a full set of EGL bindings.

pub type EGLenum = core::ffi::c_uint;

/// `EGL_TEXTURE_2D`, a `EGL_TEXTURE_TARGET` for pbuffer and client buffer binding.
pub const TEXTURE_2D: EGLenum = 0x305F;
/// `EGL_TEXTURE_RECTANGLE_ANGLE`, from `EGL_ANGLE_iosurface_client_buffer`.
pub const TEXTURE_RECTANGLE_ANGLE: EGLenum = 0x345B;

// EGL_KHR_gl_texture_2D_image
pub const GL_TEXTURE_2D_KHR: EGLenum = 0x30B1;
// EGL_KHR_gl_texture_3D_image
pub const GL_TEXTURE_3D_KHR: EGLenum = 0x30B2;
// EGL_KHR_gl_texture_cubemap_image
pub const GL_TEXTURE_CUBE_MAP_POSITIVE_X_KHR: EGLenum = 0x30B3;
pub const GL_TEXTURE_CUBE_MAP_NEGATIVE_X_KHR: EGLenum = 0x30B4;
pub const GL_TEXTURE_CUBE_MAP_POSITIVE_Y_KHR: EGLenum = 0x30B5;
pub const GL_TEXTURE_CUBE_MAP_NEGATIVE_Y_KHR: EGLenum = 0x30B6;
pub const GL_TEXTURE_CUBE_MAP_POSITIVE_Z_KHR: EGLenum = 0x30B7;
pub const GL_TEXTURE_CUBE_MAP_NEGATIVE_Z_KHR: EGLenum = 0x30B8;
