//! Dirty masks for cached prim state.
//!
//! Each cached attribute of an image shader owns exactly one bit. A mask
//! travels from the change tracker into [`Sprim::sync`](crate::Sprim::sync)
//! and back: set bits are requests to refresh, bits still set afterwards
//! are attributes the source could not answer for this cycle.

use bitflags::bitflags;

use crate::tokens;

bitflags! {
    /// Which cached attributes of an image shader are stale relative to
    /// the authoring source.
    ///
    /// The empty mask is the clean state. `DirtyBits::all()` is the union
    /// of every defined bit and is what a freshly created prim reports as
    /// its initial mask; the union is derived from the flag definitions,
    /// so adding an attribute bit updates it automatically.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirtyBits: u32 {
        /// `enabled` is stale.
        const ENABLED = 1 << 0;

        /// `priority` is stale.
        const PRIORITY = 1 << 1;

        /// `filePath` is stale.
        const FILE_PATH = 1 << 2;

        /// `constants` is stale.
        const CONSTANTS = 1 << 3;
    }
}

impl DirtyBits {
    /// The mask with no attribute marked stale.
    pub const CLEAN: Self = Self::empty();

    /// True when no defined attribute bit is set.
    ///
    /// Bits outside the defined set belong to newer protocol revisions and
    /// are ignored here, the same way sync leaves them untouched.
    pub fn is_clean(self) -> bool {
        self.intersection(Self::all()).is_empty()
    }

    /// The bit owning `attribute`, or `None` for names this prim class
    /// does not define.
    ///
    /// Authoring glue uses this to translate an edited attribute name into
    /// the mark to record with the change tracker.
    pub fn for_attribute(attribute: &str) -> Option<Self> {
        match attribute {
            tokens::ENABLED => Some(Self::ENABLED),
            tokens::PRIORITY => Some(Self::PRIORITY),
            tokens::FILE_PATH => Some(Self::FILE_PATH),
            tokens::CONSTANTS => Some(Self::CONSTANTS),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_union_of_defined_bits() {
        let union =
            DirtyBits::ENABLED | DirtyBits::PRIORITY | DirtyBits::FILE_PATH | DirtyBits::CONSTANTS;
        assert_eq!(DirtyBits::all(), union);
        assert!(DirtyBits::CLEAN.is_clean());
        assert!(!DirtyBits::all().is_clean());
    }

    #[test]
    fn test_undefined_bits_do_not_count_as_dirty() {
        let unknown = DirtyBits::from_bits_retain(1 << 17);
        assert!(unknown.is_clean());
        assert!(!(unknown | DirtyBits::PRIORITY).is_clean());
    }

    #[test]
    fn test_for_attribute_maps_each_token() {
        assert_eq!(
            DirtyBits::for_attribute(tokens::ENABLED),
            Some(DirtyBits::ENABLED)
        );
        assert_eq!(
            DirtyBits::for_attribute(tokens::PRIORITY),
            Some(DirtyBits::PRIORITY)
        );
        assert_eq!(
            DirtyBits::for_attribute(tokens::FILE_PATH),
            Some(DirtyBits::FILE_PATH)
        );
        assert_eq!(
            DirtyBits::for_attribute(tokens::CONSTANTS),
            Some(DirtyBits::CONSTANTS)
        );
        assert_eq!(DirtyBits::for_attribute("displayColor"), None);
    }
}
