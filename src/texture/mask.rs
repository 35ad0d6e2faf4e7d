use super::TextureType;

bitflags::bitflags! {
    /// A set of [`TextureType`]s, one bit per type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct TextureTypeMask: u8 {
        const D2 = 1 << 0;
        const D2Array = 1 << 1;
        const D2Multisample = 1 << 2;
        const D3 = 1 << 3;
        const Rectangle = 1 << 4;
        const External = 1 << 5;
        const CubeMap = 1 << 6;
    }
}

impl TextureTypeMask {
    /// The single bit of `ty`.
    ///
    /// # Panics
    /// If `ty` is [`TextureType::InvalidEnum`].
    pub fn from_type(ty: TextureType) -> Self {
        match ty {
            TextureType::D2 => Self::D2,
            TextureType::D2Array => Self::D2Array,
            TextureType::D2Multisample => Self::D2Multisample,
            TextureType::D3 => Self::D3,
            TextureType::Rectangle => Self::Rectangle,
            TextureType::External => Self::External,
            TextureType::CubeMap => Self::CubeMap,
            TextureType::InvalidEnum => unreachable!("TextureType::InvalidEnum has no mask bit"),
        }
    }
    pub fn contains_type(self, ty: TextureType) -> bool {
        self.contains(Self::from_type(ty))
    }
    pub fn insert_type(&mut self, ty: TextureType) {
        self.insert(Self::from_type(ty));
    }
    /// The types in this set, in [`TextureType::ALL`] order.
    pub fn types(self) -> impl Iterator<Item = TextureType> {
        TextureType::ALL
            .into_iter()
            .filter(move |&ty| self.contains_type(ty))
    }
}

impl From<TextureType> for TextureTypeMask {
    fn from(ty: TextureType) -> Self {
        Self::from_type(ty)
    }
}

impl FromIterator<TextureType> for TextureTypeMask {
    fn from_iter<I: IntoIterator<Item = TextureType>>(iter: I) -> Self {
        let mut mask = Self::empty();
        for ty in iter {
            mask.insert_type(ty);
        }
        mask
    }
}
