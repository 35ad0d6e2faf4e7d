//! Shader sampler types, as reported by `glGetActiveUniform`.
use super::{angle, gl, GLenum, TextureType};

impl TextureType {
    /// The type of texture a sampler of type `sampler_type` reads from.
    ///
    /// The component kind (float, signed, unsigned) and shadow comparison of the sampler
    /// do not affect the result.
    ///
    /// # Panics
    /// If `sampler_type` is not a sampler type.
    #[doc(alias = "GL_SAMPLER_2D")]
    #[doc(alias = "GL_SAMPLER_2D_SHADOW")]
    #[doc(alias = "GL_SAMPLER_EXTERNAL_OES")]
    #[doc(alias = "GL_SAMPLER_CUBE")]
    #[doc(alias = "GL_SAMPLER_2D_ARRAY")]
    #[doc(alias = "GL_SAMPLER_3D")]
    #[doc(alias = "GL_SAMPLER_2D_MULTISAMPLE")]
    #[doc(alias = "GL_SAMPLER_2D_RECT_ANGLE")]
    pub fn from_sampler_type(sampler_type: GLenum) -> Self {
        match sampler_type {
            gl::SAMPLER_2D
            | gl::INT_SAMPLER_2D
            | gl::UNSIGNED_INT_SAMPLER_2D
            | gl::SAMPLER_2D_SHADOW => Self::D2,

            gl::SAMPLER_EXTERNAL_OES => Self::External,

            gl::SAMPLER_CUBE
            | gl::INT_SAMPLER_CUBE
            | gl::UNSIGNED_INT_SAMPLER_CUBE
            | gl::SAMPLER_CUBE_SHADOW => Self::CubeMap,

            gl::SAMPLER_2D_ARRAY
            | gl::INT_SAMPLER_2D_ARRAY
            | gl::UNSIGNED_INT_SAMPLER_2D_ARRAY
            | gl::SAMPLER_2D_ARRAY_SHADOW => Self::D2Array,

            gl::SAMPLER_3D | gl::INT_SAMPLER_3D | gl::UNSIGNED_INT_SAMPLER_3D => Self::D3,

            gl::SAMPLER_2D_MULTISAMPLE
            | gl::INT_SAMPLER_2D_MULTISAMPLE
            | gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE => Self::D2Multisample,

            angle::SAMPLER_2D_RECT => Self::Rectangle,

            _ => unreachable!("{sampler_type:#06x} is not a sampler type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all(samplers: &[GLenum], expected: TextureType) {
        for &sampler in samplers {
            assert_eq!(
                TextureType::from_sampler_type(sampler),
                expected,
                "sampler {sampler:#06x}"
            );
        }
    }

    #[test]
    fn kind_and_shadow_are_ignored() {
        assert_all(
            &[
                gl::SAMPLER_2D,
                gl::INT_SAMPLER_2D,
                gl::UNSIGNED_INT_SAMPLER_2D,
                gl::SAMPLER_2D_SHADOW,
            ],
            TextureType::D2,
        );
        assert_all(
            &[
                gl::SAMPLER_CUBE,
                gl::INT_SAMPLER_CUBE,
                gl::UNSIGNED_INT_SAMPLER_CUBE,
                gl::SAMPLER_CUBE_SHADOW,
            ],
            TextureType::CubeMap,
        );
        assert_all(
            &[
                gl::SAMPLER_2D_ARRAY,
                gl::INT_SAMPLER_2D_ARRAY,
                gl::UNSIGNED_INT_SAMPLER_2D_ARRAY,
                gl::SAMPLER_2D_ARRAY_SHADOW,
            ],
            TextureType::D2Array,
        );
        assert_all(
            &[gl::SAMPLER_3D, gl::INT_SAMPLER_3D, gl::UNSIGNED_INT_SAMPLER_3D],
            TextureType::D3,
        );
        assert_all(
            &[
                gl::SAMPLER_2D_MULTISAMPLE,
                gl::INT_SAMPLER_2D_MULTISAMPLE,
                gl::UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE,
            ],
            TextureType::D2Multisample,
        );
    }

    #[test]
    fn extension_samplers() {
        assert_eq!(
            TextureType::from_sampler_type(gl::SAMPLER_EXTERNAL_OES),
            TextureType::External
        );
        assert_eq!(
            TextureType::from_sampler_type(angle::SAMPLER_2D_RECT),
            TextureType::Rectangle
        );
    }

    #[test]
    #[should_panic(expected = "is not a sampler type")]
    fn non_sampler_panics() {
        let _ = TextureType::from_sampler_type(gl::FLOAT_VEC4);
    }
}
