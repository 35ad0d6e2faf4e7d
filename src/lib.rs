//! # glpack
//!
//! Packed, strongly-typed texture enums for GL ES 3.X and the EGL image extensions,
//! and the translations between them.
//!
//! The GL hands out texture binding points as loose `GLenum`s: `GL_TEXTURE_2D` names a
//! *target* and a *type* at once, while `GL_TEXTURE_CUBE_MAP_POSITIVE_X` is a target
//! whose type is `GL_TEXTURE_CUBE_MAP`. This crate splits those into two closed enums,
//! [`texture::TextureTarget`] and [`texture::TextureType`], and provides the (pure,
//! allocation-free) mappings between them, from shader sampler types, and from EGL
//! image targets.
//!
//! Every mapping is total over the values it documents. Feeding a value outside of that
//! set is a caller bug and panics rather than producing a guess. Where a raw value comes
//! from an untrusted source, use the `TryFrom<GLenum>` impls instead, which report an
//! [`UnknownEnum`].
//!
//! ## Doc Aliases
//! Conversions carry `#[doc(alias = ...)]` for the GL or EGL constants they deal with, so
//! searching the docs for e.g. `GL_SAMPLER_2D_SHADOW` or `EGL_GL_TEXTURE_3D_KHR` finds the
//! function that handles it. The full name must be typed **exactly**, case-sensitive,
//! including the `GL_`/`EGL_` prefix.

#![warn(rustdoc::all)]

use gl::types::GLenum;

pub mod gl {
    #![doc(hidden)]
    #![allow(clippy::all)]
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

pub mod angle;
pub mod egl;
pub mod egl_gl;
pub mod sampler;
pub mod texture;

pub use texture::{TextureTarget, TextureType, TextureTypeMask};

/// Trait for rusty `GLenum`s.
///
/// # Safety
/// * Must be implemented only on enums.
/// * The enum must be `#[repr(u32)]`
/// * Every variant must be a correct constant of `GLenum`, or `GL_NONE` for a sentinel.
pub unsafe trait GLEnum {
    /// Access the raw `GLenum` value of this enum.
    fn as_gl(&self) -> GLenum {
        unsafe { *std::ptr::from_ref(self).cast() }
    }
}

/// A raw `GLenum` that does not name any variant of the enum it was converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEnum {
    /// Name of the enum the conversion targeted, e.g. `"TextureTarget"`.
    pub kind: &'static str,
    /// The offending value.
    pub value: GLenum,
}
impl std::fmt::Display for UnknownEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#06x} is not a valid {}", self.value, self.kind)
    }
}
impl std::error::Error for UnknownEnum {}

#[cfg(test)]
mod tests {
    use super::{egl, egl_gl, gl, TextureTarget, TextureType, UnknownEnum};

    #[test]
    fn unknown_enum_display() {
        let err = UnknownEnum {
            kind: "TextureTarget",
            value: 0x1234,
        };
        assert_eq!(err.to_string(), "0x1234 is not a valid TextureTarget");
    }

    #[test]
    fn cube_face_z_and_friends() {
        assert_eq!(
            TextureTarget::CubeMapPositiveZ.to_type(),
            TextureType::CubeMap
        );
        assert_eq!(
            TextureTarget::from_cube_face_index(4),
            TextureTarget::CubeMapPositiveZ
        );
        assert_eq!(
            TextureType::from_sampler_type(gl::SAMPLER_2D_SHADOW),
            TextureType::D2
        );
        assert_eq!(
            egl_gl::egl_image_target_to_texture_target(
                &egl_gl::KhrGlImage,
                egl::GL_TEXTURE_3D_KHR
            ),
            TextureTarget::D3
        );
    }
}
