//! Translation of EGL image and client buffer targets into packed GL enums.
//!
//! Which EGL values denote cube map faces, and in what order, is a property of the EGL
//! extension in use. That knowledge lives behind [`CubeFaceLookup`], with [`KhrGlImage`]
//! implementing it for `EGL_KHR_gl_texture_cubemap_image`.
use crate::egl::{self, EGLenum};
use crate::texture::{cube::FACE_COUNT, TextureTarget, TextureType};

/// Maps EGL cube map face targets to face indices.
pub trait CubeFaceLookup {
    /// Whether `target` names one of the six faces of a cube map.
    fn is_cube_map_target(&self, target: EGLenum) -> bool;
    /// The face (layer) index of `target`, in `0..6`.
    ///
    /// Only called with targets for which [`Self::is_cube_map_target`] holds.
    fn layer_index(&self, target: EGLenum) -> usize;
}

/// The face targets of `EGL_KHR_gl_texture_cubemap_image`, which are contiguous and in face order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KhrGlImage;
impl CubeFaceLookup for KhrGlImage {
    fn is_cube_map_target(&self, target: EGLenum) -> bool {
        (egl::GL_TEXTURE_CUBE_MAP_POSITIVE_X_KHR..=egl::GL_TEXTURE_CUBE_MAP_NEGATIVE_Z_KHR)
            .contains(&target)
    }
    fn layer_index(&self, target: EGLenum) -> usize {
        assert!(
            self.is_cube_map_target(target),
            "{target:#06x} is not an EGL cube map target"
        );
        (target - egl::GL_TEXTURE_CUBE_MAP_POSITIVE_X_KHR) as usize
    }
}

/// The `EGL_KHR_gl_texture_cubemap_image` target for the `layer`th face.
///
/// # Panics
/// If `layer` is not in `0..6`.
pub const fn layer_index_to_cube_map_target(layer: usize) -> EGLenum {
    assert!(layer < FACE_COUNT, "cube map layer index out of range");
    egl::GL_TEXTURE_CUBE_MAP_POSITIVE_X_KHR + layer as EGLenum
}

/// The GL face target of an EGL cube map face target.
///
/// # Panics
/// If `lookup` does not consider `target` a cube map face.
pub fn egl_cube_map_target_to_cube_map_target(
    lookup: &impl CubeFaceLookup,
    target: EGLenum,
) -> TextureTarget {
    assert!(
        lookup.is_cube_map_target(target),
        "{target:#06x} is not an EGL cube map target"
    );
    TextureTarget::from_cube_face_index(lookup.layer_index(target))
}

/// The GL target an `EGLImage` created from a GL texture refers to.
///
/// # Panics
/// If `target` is not one of the `EGL_GL_TEXTURE_*_KHR` image targets.
#[doc(alias = "EGL_GL_TEXTURE_2D_KHR")]
#[doc(alias = "EGL_GL_TEXTURE_3D_KHR")]
#[doc(alias = "EGL_GL_TEXTURE_CUBE_MAP_POSITIVE_X_KHR")]
pub fn egl_image_target_to_texture_target(
    lookup: &impl CubeFaceLookup,
    target: EGLenum,
) -> TextureTarget {
    match target {
        egl::GL_TEXTURE_2D_KHR => TextureTarget::D2,

        egl::GL_TEXTURE_CUBE_MAP_POSITIVE_X_KHR
        | egl::GL_TEXTURE_CUBE_MAP_NEGATIVE_X_KHR
        | egl::GL_TEXTURE_CUBE_MAP_POSITIVE_Y_KHR
        | egl::GL_TEXTURE_CUBE_MAP_NEGATIVE_Y_KHR
        | egl::GL_TEXTURE_CUBE_MAP_POSITIVE_Z_KHR
        | egl::GL_TEXTURE_CUBE_MAP_NEGATIVE_Z_KHR => {
            egl_cube_map_target_to_cube_map_target(lookup, target)
        }

        egl::GL_TEXTURE_3D_KHR => TextureTarget::D3,

        _ => unreachable!("{target:#06x} is not an EGL image target"),
    }
}

/// The GL texture type of an `EGL_TEXTURE_TARGET` attribute value.
///
/// # Panics
/// If `target` is neither `EGL_TEXTURE_2D` nor `EGL_TEXTURE_RECTANGLE_ANGLE`.
#[doc(alias = "EGL_TEXTURE_2D")]
#[doc(alias = "EGL_TEXTURE_RECTANGLE_ANGLE")]
pub fn egl_texture_target_to_texture_type(target: EGLenum) -> TextureType {
    match target {
        egl::TEXTURE_2D => TextureType::D2,
        egl::TEXTURE_RECTANGLE_ANGLE => TextureType::Rectangle,
        _ => unreachable!("{target:#06x} is not an EGL texture target"),
    }
}
