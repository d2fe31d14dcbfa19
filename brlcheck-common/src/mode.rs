use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

/// Bitmask of translation modes passed to the engine.
///
/// Bit values match the ones the braille engine uses for its `mode`
/// argument, so the raw value can be handed over unchanged.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct ModeFlags(u32);

impl ModeFlags {
    pub const EMPTY: ModeFlags = ModeFlags(0);
    pub const NO_CONTRACTIONS: ModeFlags = ModeFlags(1);
    pub const COMPBRL_AT_CURSOR: ModeFlags = ModeFlags(1 << 1);
    pub const DOTS_IO: ModeFlags = ModeFlags(1 << 2);
    pub const COMP8_DOTS: ModeFlags = ModeFlags(1 << 3);
    pub const PASS1_ONLY: ModeFlags = ModeFlags(1 << 4);
    pub const COMPBRL_LEFT_CURSOR: ModeFlags = ModeFlags(1 << 5);
    pub const OTHER_TRANS: ModeFlags = ModeFlags(1 << 6);
    pub const UC_BRL: ModeFlags = ModeFlags(1 << 7);

    const NAMED: [(&'static str, ModeFlags); 8] = [
        ("noContractions", ModeFlags::NO_CONTRACTIONS),
        ("compbrlAtCursor", ModeFlags::COMPBRL_AT_CURSOR),
        ("dotsIO", ModeFlags::DOTS_IO),
        ("comp8Dots", ModeFlags::COMP8_DOTS),
        ("pass1Only", ModeFlags::PASS1_ONLY),
        ("compbrlLeftCursor", ModeFlags::COMPBRL_LEFT_CURSOR),
        ("otherTrans", ModeFlags::OTHER_TRANS),
        ("ucBrl", ModeFlags::UC_BRL),
    ];

    /// Looks up a mode by the name used in test documents. Matching is
    /// case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<ModeFlags> {
        Self::NAMED
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, flag)| *flag)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> ModeFlags {
        ModeFlags(bits)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, other: ModeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the modes set in this mask, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| name)
    }
}

impl BitOr for ModeFlags {
    type Output = ModeFlags;

    fn bitor(self, rhs: ModeFlags) -> ModeFlags {
        ModeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModeFlags {
    fn bitor_assign(&mut self, rhs: ModeFlags) {
        self.0 |= rhs.0;
    }
}

impl Display for ModeFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ModeFlags;

    #[test]
    fn named_bits_are_disjoint() {
        let mut seen = 0u32;
        for (_, flag) in ModeFlags::NAMED {
            assert_eq!(flag.bits().count_ones(), 1);
            assert_eq!(seen & flag.bits(), 0);
            seen |= flag.bits();
        }
        assert_eq!(seen, 0xFF);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ModeFlags::from_name("dotsIO"), Some(ModeFlags::DOTS_IO));
        assert_eq!(ModeFlags::from_name("dotsio"), None);
        assert_eq!(ModeFlags::from_name(""), None);
    }

    #[test]
    fn names_follow_bit_order() {
        let mask = ModeFlags::UC_BRL | ModeFlags::NO_CONTRACTIONS;
        assert_eq!(mask.names().collect::<Vec<_>>(), ["noContractions", "ucBrl"]);
        assert_eq!(mask.bits(), 129);
    }
}
