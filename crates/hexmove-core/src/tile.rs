use crate::element::Element;

/// Per-tile terrain data: top color, height level and obstruction flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileData {
    pub top: Element,
    pub height: i32,
    pub blocked: bool,
}

impl TileData {
    /// Stand-in for a coordinate with no tile: colorless and obstructed.
    pub const VOID: Self = Self {
        top: Element::None,
        height: 0,
        blocked: true,
    };

    /// An unobstructed tile of the given color and height.
    #[inline]
    pub const fn new(top: Element, height: i32) -> Self {
        Self {
            top,
            height,
            blocked: false,
        }
    }

    /// Same tile with the obstruction flag set.
    #[inline]
    pub const fn obstructed(self) -> Self {
        Self {
            blocked: true,
            ..self
        }
    }
}
