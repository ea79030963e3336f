use hexmove_core::{Element, ElementMask};

/// Which tile colors a mover may cross and stop on.
///
/// A mover always crosses its own element and stone. Water is opt-in for
/// both crossing and stopping. Stone is crossable but only a legal stop
/// with [`with_stone_destination`](Self::with_stone_destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRules {
    pub element: Element,
    pub allow_water: bool,
    pub stone_destination: bool,
    pub any_destination: bool,
}

impl MoveRules {
    /// Rules for a mover of `element` with every flag off.
    pub const fn new(element: Element) -> Self {
        Self {
            element,
            allow_water: false,
            stone_destination: false,
            any_destination: false,
        }
    }

    /// Let the mover cross and stop on water.
    pub const fn with_water(mut self, allow: bool) -> Self {
        self.allow_water = allow;
        self
    }

    /// Let the mover stop on stone.
    pub const fn with_stone_destination(mut self, allow: bool) -> Self {
        self.stone_destination = allow;
        self
    }

    /// Accept any stopping color and skip destination checks.
    pub const fn with_any_destination(mut self, allow: bool) -> Self {
        self.any_destination = allow;
        self
    }

    /// Colors the mover may pass through.
    pub fn path_mask(&self) -> ElementMask {
        let mut mask = ElementMask::of(self.element) | ElementMask::STONE;
        if self.allow_water {
            mask |= ElementMask::WATER;
        }
        mask
    }

    /// Colors the mover may end its move on.
    pub fn destination_mask(&self) -> ElementMask {
        if self.any_destination {
            return ElementMask::ANY;
        }
        let mut mask = ElementMask::of(self.element);
        if self.stone_destination {
            mask |= ElementMask::STONE;
        }
        if self.allow_water {
            mask |= ElementMask::WATER;
        }
        mask
    }
}
