use strum::EnumCount;

/// Sprite resolution a frame belongs to. Declaration order is the order of
/// the `sprite_size_t` enum on the device, so it must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    rotate_enum::RotateEnum,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

pub const SIZE_COUNT: usize = SizeClass::COUNT;

impl SizeClass {
    /// Uppercase name as used in filenames and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            SizeClass::Small => "SMALL",
            SizeClass::Medium => "MEDIUM",
            SizeClass::Large => "LARGE",
        }
    }

    /// Lowercase fragment used inside generated identifiers.
    pub fn ident(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }

    /// The `sprite_size_t` enumerant.
    pub fn enumerant(self) -> &'static str {
        match self {
            SizeClass::Small => "SPRITE_SMALL",
            SizeClass::Medium => "SPRITE_MEDIUM",
            SizeClass::Large => "SPRITE_LARGE",
        }
    }

    pub fn slot(self) -> usize {
        self as usize
    }

    /// Case-insensitive lookup of an uppercase size name.
    pub fn from_name(name: &str) -> Option<Self> {
        [SizeClass::Small, SizeClass::Medium, SizeClass::Large]
            .into_iter()
            .find(|size| size.name().eq_ignore_ascii_case(name))
    }

    /// Size the firmware shows for a storage usage ratio in `0.0..=1.0`.
    pub fn for_usage(usage: f32) -> Self {
        if usage < 0.33 {
            SizeClass::Small
        } else if usage < 0.66 {
            SizeClass::Medium
        } else {
            SizeClass::Large
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn declaration_order() {
        let order: alloc::vec::Vec<_> = SizeClass::iter().collect();
        assert_eq!(order, [SizeClass::Small, SizeClass::Medium, SizeClass::Large]);
        assert_eq!(SIZE_COUNT, 3);
        assert_eq!(SizeClass::Large.slot(), 2);
    }

    #[test]
    fn names() {
        assert_eq!(SizeClass::from_name("medium"), Some(SizeClass::Medium));
        assert_eq!(SizeClass::from_name("LaRgE"), Some(SizeClass::Large));
        assert_eq!(SizeClass::from_name("HUGE"), None);
        assert_eq!(SizeClass::Small.enumerant(), "SPRITE_SMALL");
        assert_eq!(SizeClass::Medium.ident(), "medium");
    }

    #[test]
    fn usage_thresholds() {
        assert_eq!(SizeClass::for_usage(0.0), SizeClass::Small);
        assert_eq!(SizeClass::for_usage(0.329), SizeClass::Small);
        assert_eq!(SizeClass::for_usage(0.33), SizeClass::Medium);
        assert_eq!(SizeClass::for_usage(0.659), SizeClass::Medium);
        assert_eq!(SizeClass::for_usage(0.66), SizeClass::Large);
        assert_eq!(SizeClass::for_usage(1.0), SizeClass::Large);
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(SizeClass::Large.next(), SizeClass::Small);
        assert_eq!(SizeClass::Small.prev(), SizeClass::Large);
    }
}
