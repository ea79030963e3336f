//! Terrain colors: [`Element`] and [`ElementMask`].

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// The top color of a tile. Determines which movers may cross or stop on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// Colorless. Matches no mask.
    #[default]
    None,
    Stone,
    Water,
    Vine,
    Fire,
    Lightning,
}

impl Element {
    /// Every colored element, in mask bit order.
    pub const ALL: [Element; 5] = [
        Element::Stone,
        Element::Water,
        Element::Vine,
        Element::Fire,
        Element::Lightning,
    ];

    /// Single-character code used by text fixtures.
    pub const fn symbol(self) -> char {
        match self {
            Element::None => '.',
            Element::Stone => 'S',
            Element::Water => 'W',
            Element::Vine => 'V',
            Element::Fire => 'F',
            Element::Lightning => 'L',
        }
    }

    /// Inverse of [`symbol`](Self::symbol).
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Element::None),
            'S' => Some(Element::Stone),
            'W' => Some(Element::Water),
            'V' => Some(Element::Vine),
            'F' => Some(Element::Fire),
            'L' => Some(Element::Lightning),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::None => "none",
            Element::Stone => "stone",
            Element::Water => "water",
            Element::Vine => "vine",
            Element::Fire => "fire",
            Element::Lightning => "lightning",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// ElementMask
// ---------------------------------------------------------------------------

/// Bitmask over the colored elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementMask(pub u8);

impl ElementMask {
    pub const NONE: Self = Self(0);
    pub const STONE: Self = Self(1 << 0);
    pub const WATER: Self = Self(1 << 1);
    pub const VINE: Self = Self(1 << 2);
    pub const FIRE: Self = Self(1 << 3);
    pub const LIGHTNING: Self = Self(1 << 4);
    pub const ANY: Self = Self(
        Self::STONE.0 | Self::WATER.0 | Self::VINE.0 | Self::FIRE.0 | Self::LIGHTNING.0,
    );

    /// The single bit for `element`. [`Element::None`] maps to the empty mask.
    #[inline]
    pub const fn of(element: Element) -> Self {
        match element {
            Element::None => Self::NONE,
            Element::Stone => Self::STONE,
            Element::Water => Self::WATER,
            Element::Vine => Self::VINE,
            Element::Fire => Self::FIRE,
            Element::Lightning => Self::LIGHTNING,
        }
    }

    /// Whether `element` is a member of the mask.
    #[inline]
    pub const fn matches(self, element: Element) -> bool {
        self.intersects(Self::of(element))
    }

    /// Whether the two masks share at least one bit.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Element> for ElementMask {
    #[inline]
    fn from(element: Element) -> Self {
        Self::of(element)
    }
}

impl BitOr for ElementMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ElementMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ElementMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
