use crate::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxSet {
    bits: u64,
}

impl SyntaxSet {
    pub const EMPTY: Self = Self { bits: 0 };

    const fn from_kind(kind: SyntaxKind) -> Self {
        let kind = kind as u32;
        debug_assert!(kind < u64::BITS, "kind does not fit into the set");
        Self { bits: 1 << kind }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits }
    }

    pub const fn new<const N: usize>(kinds: [SyntaxKind; N]) -> Self {
        let mut set = Self::EMPTY;
        let mut index = 0;

        while index < N {
            set = set.union(Self::from_kind(kinds[index]));
            index += 1;
        }

        set
    }

    pub const fn contains(self, kind: SyntaxKind) -> bool {
        self.bits & Self::from_kind(kind).bits != 0
    }

    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        SyntaxKind::ALL.into_iter().filter(move |&kind| self.contains(kind))
    }
}
