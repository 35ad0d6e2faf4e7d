//! Cube map faces.
//!
//! Faces are indexed in the order GL lays out cube map layers:
//! +X, -X, +Y, -Y, +Z, -Z.
use super::TextureTarget;

pub const FACE_COUNT: usize = 6;

/// The face targets, indexed by face.
pub const FACE_TARGETS: [TextureTarget; FACE_COUNT] = [
    TextureTarget::CubeMapPositiveX,
    TextureTarget::CubeMapNegativeX,
    TextureTarget::CubeMapPositiveY,
    TextureTarget::CubeMapNegativeY,
    TextureTarget::CubeMapPositiveZ,
    TextureTarget::CubeMapNegativeZ,
];

impl TextureTarget {
    /// The target of the `face`th cube map face.
    ///
    /// # Panics
    /// If `face` is not in `0..FACE_COUNT`.
    #[doc(alias = "GL_TEXTURE_CUBE_MAP_POSITIVE_X")]
    pub fn from_cube_face_index(face: usize) -> Self {
        match Self::try_from_cube_face_index(face) {
            Some(target) => target,
            None => panic!("cube face index {face} out of range 0..{FACE_COUNT}"),
        }
    }
    /// The target of the `face`th cube map face, or `None` if there is no such face.
    pub const fn try_from_cube_face_index(face: usize) -> Option<Self> {
        match face {
            0 => Some(Self::CubeMapPositiveX),
            1 => Some(Self::CubeMapNegativeX),
            2 => Some(Self::CubeMapPositiveY),
            3 => Some(Self::CubeMapNegativeY),
            4 => Some(Self::CubeMapPositiveZ),
            5 => Some(Self::CubeMapNegativeZ),
            _ => None,
        }
    }
    /// The face index of a cube map face target, `None` for all other targets.
    pub const fn cube_face_index(self) -> Option<usize> {
        match self {
            Self::CubeMapPositiveX => Some(0),
            Self::CubeMapNegativeX => Some(1),
            Self::CubeMapPositiveY => Some(2),
            Self::CubeMapNegativeY => Some(3),
            Self::CubeMapPositiveZ => Some(4),
            Self::CubeMapNegativeZ => Some(5),
            _ => None,
        }
    }
    pub const fn is_cube_map_face(self) -> bool {
        self.cube_face_index().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_order() {
        for (face, target) in FACE_TARGETS.into_iter().enumerate() {
            assert_eq!(TextureTarget::from_cube_face_index(face), target);
            assert_eq!(target.cube_face_index(), Some(face));
        }
        assert_eq!(
            TextureTarget::from_cube_face_index(4),
            TextureTarget::CubeMapPositiveZ
        );
    }

    #[test]
    fn faces_are_distinct() {
        for a in 0..FACE_COUNT {
            for b in (a + 1)..FACE_COUNT {
                assert_ne!(
                    TextureTarget::from_cube_face_index(a),
                    TextureTarget::from_cube_face_index(b)
                );
            }
        }
    }

    #[test]
    fn only_faces_have_an_index() {
        let faces = TextureTarget::ALL
            .into_iter()
            .filter(|target| target.is_cube_map_face())
            .count();
        assert_eq!(faces, FACE_COUNT);
        assert_eq!(TextureTarget::D2Array.cube_face_index(), None);
        assert_eq!(TextureTarget::InvalidEnum.cube_face_index(), None);
    }

    #[test]
    fn out_of_range_face_is_none() {
        assert_eq!(TextureTarget::try_from_cube_face_index(FACE_COUNT), None);
        assert_eq!(TextureTarget::try_from_cube_face_index(usize::MAX), None);
    }

    #[test]
    #[should_panic(expected = "cube face index 6 out of range")]
    fn out_of_range_face_panics() {
        let _ = TextureTarget::from_cube_face_index(6);
    }
}
