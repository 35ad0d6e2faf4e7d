//! Texture binding points ([`TextureTarget`]) and the categories they belong to ([`TextureType`]).
//!
//! The two enums mostly mirror each other. The exception is cube maps: a cube map
//! texture is *bound* as `GL_TEXTURE_CUBE_MAP`, but its images are *addressed* by one of
//! six face targets. Going from a face to its type is always possible, going from
//! [`TextureType::CubeMap`] to a target is not, since the face is unknown. Use
//! [`TextureTarget::from_cube_face_index`] for that direction.
use super::{angle, gl, GLEnum, GLenum, UnknownEnum};

pub mod cube;
mod mask;

pub use mask::TextureTypeMask;

/// A texture image binding point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TextureTarget {
    D2 = gl::TEXTURE_2D,
    D2Array = gl::TEXTURE_2D_ARRAY,
    D2Multisample = gl::TEXTURE_2D_MULTISAMPLE,
    D3 = gl::TEXTURE_3D,
    Rectangle = angle::TEXTURE_RECTANGLE,
    External = gl::TEXTURE_EXTERNAL_OES,
    CubeMapPositiveX = gl::TEXTURE_CUBE_MAP_POSITIVE_X,
    CubeMapNegativeX = gl::TEXTURE_CUBE_MAP_NEGATIVE_X,
    CubeMapPositiveY = gl::TEXTURE_CUBE_MAP_POSITIVE_Y,
    CubeMapNegativeY = gl::TEXTURE_CUBE_MAP_NEGATIVE_Y,
    CubeMapPositiveZ = gl::TEXTURE_CUBE_MAP_POSITIVE_Z,
    CubeMapNegativeZ = gl::TEXTURE_CUBE_MAP_NEGATIVE_Z,
    /// Result of packing a `GLenum` that is not a texture target.
    InvalidEnum = gl::NONE,
}
// Safety: is repr(u32) enum.
unsafe impl GLEnum for TextureTarget {}

impl TextureTarget {
    /// Every target except [`Self::InvalidEnum`].
    pub const ALL: [Self; 12] = [
        Self::D2,
        Self::D2Array,
        Self::D2Multisample,
        Self::D3,
        Self::Rectangle,
        Self::External,
        Self::CubeMapPositiveX,
        Self::CubeMapNegativeX,
        Self::CubeMapPositiveY,
        Self::CubeMapNegativeY,
        Self::CubeMapPositiveZ,
        Self::CubeMapNegativeZ,
    ];

    /// Pack a raw `GLenum`. Values which are not texture targets become [`Self::InvalidEnum`].
    pub fn from_gl(gl: GLenum) -> Self {
        match gl {
            gl::TEXTURE_2D => Self::D2,
            gl::TEXTURE_2D_ARRAY => Self::D2Array,
            gl::TEXTURE_2D_MULTISAMPLE => Self::D2Multisample,
            gl::TEXTURE_3D => Self::D3,
            angle::TEXTURE_RECTANGLE => Self::Rectangle,
            gl::TEXTURE_EXTERNAL_OES => Self::External,
            gl::TEXTURE_CUBE_MAP_POSITIVE_X => Self::CubeMapPositiveX,
            gl::TEXTURE_CUBE_MAP_NEGATIVE_X => Self::CubeMapNegativeX,
            gl::TEXTURE_CUBE_MAP_POSITIVE_Y => Self::CubeMapPositiveY,
            gl::TEXTURE_CUBE_MAP_NEGATIVE_Y => Self::CubeMapNegativeY,
            gl::TEXTURE_CUBE_MAP_POSITIVE_Z => Self::CubeMapPositiveZ,
            gl::TEXTURE_CUBE_MAP_NEGATIVE_Z => Self::CubeMapNegativeZ,
            _ => Self::InvalidEnum,
        }
    }
    /// The type of texture this target addresses. All six cube faces map to
    /// [`TextureType::CubeMap`].
    ///
    /// # Panics
    /// If `self` is [`Self::InvalidEnum`].
    pub fn to_type(self) -> TextureType {
        match self {
            Self::CubeMapPositiveX
            | Self::CubeMapNegativeX
            | Self::CubeMapPositiveY
            | Self::CubeMapNegativeY
            | Self::CubeMapPositiveZ
            | Self::CubeMapNegativeZ => TextureType::CubeMap,
            Self::External => TextureType::External,
            Self::Rectangle => TextureType::Rectangle,
            Self::D2 => TextureType::D2,
            Self::D2Array => TextureType::D2Array,
            Self::D2Multisample => TextureType::D2Multisample,
            Self::D3 => TextureType::D3,
            Self::InvalidEnum => unreachable!("TextureTarget::InvalidEnum has no texture type"),
        }
    }
}

impl TryFrom<GLenum> for TextureTarget {
    type Error = UnknownEnum;
    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        match Self::from_gl(value) {
            Self::InvalidEnum => Err(UnknownEnum {
                kind: "TextureTarget",
                value,
            }),
            target => Ok(target),
        }
    }
}

/// The dimensionality and kind of a texture, regardless of which face is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TextureType {
    D2 = gl::TEXTURE_2D,
    D2Array = gl::TEXTURE_2D_ARRAY,
    D2Multisample = gl::TEXTURE_2D_MULTISAMPLE,
    D3 = gl::TEXTURE_3D,
    Rectangle = angle::TEXTURE_RECTANGLE,
    External = gl::TEXTURE_EXTERNAL_OES,
    CubeMap = gl::TEXTURE_CUBE_MAP,
    /// Result of packing a `GLenum` that is not a texture type.
    InvalidEnum = gl::NONE,
}
// Safety: is repr(u32) enum.
unsafe impl GLEnum for TextureType {}

impl TextureType {
    /// Every type except [`Self::InvalidEnum`].
    pub const ALL: [Self; 7] = [
        Self::D2,
        Self::D2Array,
        Self::D2Multisample,
        Self::D3,
        Self::Rectangle,
        Self::External,
        Self::CubeMap,
    ];

    /// Pack a raw `GLenum`. Values which are not texture types become [`Self::InvalidEnum`].
    pub fn from_gl(gl: GLenum) -> Self {
        match gl {
            gl::TEXTURE_2D => Self::D2,
            gl::TEXTURE_2D_ARRAY => Self::D2Array,
            gl::TEXTURE_2D_MULTISAMPLE => Self::D2Multisample,
            gl::TEXTURE_3D => Self::D3,
            angle::TEXTURE_RECTANGLE => Self::Rectangle,
            gl::TEXTURE_EXTERNAL_OES => Self::External,
            gl::TEXTURE_CUBE_MAP => Self::CubeMap,
            _ => Self::InvalidEnum,
        }
    }
    pub fn is_cube_map(self) -> bool {
        self == Self::CubeMap
    }
    /// The single target a texture of this type is addressed by.
    ///
    /// # Panics
    /// If `self` is [`Self::CubeMap`], which has six targets. Use
    /// [`TextureTarget::from_cube_face_index`] for those. Also panics on [`Self::InvalidEnum`].
    pub fn to_non_cube_target(self) -> TextureTarget {
        match self {
            Self::External => TextureTarget::External,
            Self::Rectangle => TextureTarget::Rectangle,
            Self::D2 => TextureTarget::D2,
            Self::D2Array => TextureTarget::D2Array,
            Self::D2Multisample => TextureTarget::D2Multisample,
            Self::D3 => TextureTarget::D3,
            Self::CubeMap | Self::InvalidEnum => {
                unreachable!("TextureType::{self:?} has no single texture target")
            }
        }
    }
}

impl TryFrom<GLenum> for TextureType {
    type Error = UnknownEnum;
    fn try_from(value: GLenum) -> Result<Self, Self::Error> {
        match Self::from_gl(value) {
            Self::InvalidEnum => Err(UnknownEnum {
                kind: "TextureType",
                value,
            }),
            ty => Ok(ty),
        }
    }
}

// Safety: repr(u32) enums with no fields, thus no padding.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::NoUninit for TextureTarget {}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::NoUninit for TextureType {}

// Safety: only bit patterns naming a variant are accepted.
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::CheckedBitPattern for TextureTarget {
    type Bits = GLenum;
    fn is_valid_bit_pattern(bits: &GLenum) -> bool {
        Self::try_from(*bits).is_ok()
    }
}
#[cfg(feature = "bytemuck")]
unsafe impl bytemuck::CheckedBitPattern for TextureType {
    type Bits = GLenum;
    fn is_valid_bit_pattern(bits: &GLenum) -> bool {
        Self::try_from(*bits).is_ok()
    }
}
