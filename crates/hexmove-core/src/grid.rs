//! An in-memory hex map of [`TileData`].
//!
//! [`HexGrid`] stores one tile and one entry cost per coordinate of a
//! [`Range`] and answers the queries the search engines need: tile lookup,
//! in-bounds neighbours, step cost and the height rule between neighbours.

use std::fmt;

use crate::element::Element;
use crate::geom::{Point, Range, hex_distance};
use crate::tile::TileData;

/// Default maximum height difference between two tiles a mover can step
/// across.
pub const DEFAULT_MAX_STEP: i32 = 1;

/// A rhombus-shaped hex map over a [`Range`] of axial coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHexGrid"))]
pub struct HexGrid {
    bounds: Range,
    tiles: Vec<TileData>,
    costs: Vec<i32>,
    max_step: i32,
}

/// Unchecked mirror of [`HexGrid`] used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHexGrid {
    bounds: Range,
    tiles: Vec<TileData>,
    costs: Vec<i32>,
    max_step: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHexGrid> for HexGrid {
    type Error = GridParseError;

    fn try_from(raw: RawHexGrid) -> Result<Self, GridParseError> {
        let expected = raw.bounds.len();
        if raw.tiles.len() != expected || raw.costs.len() != expected {
            return Err(GridParseError::SizeMismatch {
                expected,
                tiles: raw.tiles.len(),
                costs: raw.costs.len(),
            });
        }
        if let Some((pos, &cost)) = raw.bounds.iter().zip(&raw.costs).find(|(_, c)| **c <= 0) {
            return Err(GridParseError::BadCost { pos, cost });
        }
        Ok(Self {
            bounds: raw.bounds,
            tiles: raw.tiles,
            costs: raw.costs,
            max_step: raw.max_step,
        })
    }
}

impl HexGrid {
    /// Create a grid over `bounds` where every tile is `fill` and costs 1 to
    /// enter.
    pub fn new(bounds: Range, fill: TileData) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            tiles: vec![fill; len],
            costs: vec![1; len],
            max_step: DEFAULT_MAX_STEP,
        }
    }

    /// Parse a compact text layout, one line per `y` row starting at 0.
    ///
    /// Each whitespace-separated token is `<element><height>[#]`: an
    /// [`Element::symbol`], an optional signed height (default 0), and a
    /// trailing `#` for an obstructed tile. Example: `"S0 S1 F2#"`.
    /// All rows must have the same number of tokens.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridParseError> {
        let mut width: Option<usize> = None;
        let mut tiles = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let mut count = 0;
            for (x, token) in row.split_whitespace().enumerate() {
                tiles.push(parse_token(token).ok_or_else(|| GridParseError::BadToken {
                    pos: Point::new(x as i32, y as i32),
                    token: token.to_string(),
                })?);
                count += 1;
            }
            match width {
                None => width = Some(count),
                Some(w) if w != count => {
                    return Err(GridParseError::RaggedRow {
                        row: y,
                        expected: w,
                        found: count,
                    });
                }
                Some(_) => {}
            }
        }
        let width = width.unwrap_or(0) as i32;
        let height = if width == 0 { 0 } else { rows.len() as i32 };
        let bounds = Range::new(0, 0, width, height);
        let len = bounds.len();
        tiles.truncate(len);
        Ok(Self {
            bounds,
            tiles,
            costs: vec![1; len],
            max_step: DEFAULT_MAX_STEP,
        })
    }

    /// The coordinates covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` has a tile.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<&TileData> {
        self.bounds.index_of(p).map(|i| &self.tiles[i])
    }

    /// Replace the tile at `p`. Does nothing if out of bounds.
    pub fn set_tile(&mut self, p: Point, tile: TileData) {
        if let Some(t) = self.tile_mut(p) {
            *t = tile;
        }
    }

    /// Change the top color at `p`.
    pub fn set_element(&mut self, p: Point, top: Element) {
        if let Some(t) = self.tile_mut(p) {
            t.top = top;
        }
    }

    /// Change the height at `p`.
    pub fn set_height(&mut self, p: Point, height: i32) {
        if let Some(t) = self.tile_mut(p) {
            t.height = height;
        }
    }

    /// Mark `p` as obstructed (or clear it).
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if let Some(t) = self.tile_mut(p) {
            t.blocked = blocked;
        }
    }

    /// Cost of stepping onto `p`.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is not positive; the search engines rely on
    /// strictly increasing path costs.
    pub fn set_cost(&mut self, p: Point, cost: i32) {
        assert!(cost > 0, "step cost must be positive, got {cost}");
        if let Some(i) = self.bounds.index_of(p) {
            self.costs[i] = cost;
        }
    }

    /// Maximum height difference a single step may cross.
    #[inline]
    pub fn max_step(&self) -> i32 {
        self.max_step
    }

    /// Change the climb rule used by [`is_passable`](Self::is_passable).
    pub fn set_max_step(&mut self, max_step: i32) {
        self.max_step = max_step;
    }

    /// In-bounds hex neighbours of `p`, appended to `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.hex_neighbors().into_iter().filter(|&n| self.contains(n)));
    }

    /// Cost of moving from `from` onto adjacent `to`: the entry cost of `to`.
    /// Out-of-bounds targets cost 1.
    #[inline]
    pub fn cost(&self, _from: Point, to: Point) -> i32 {
        self.bounds.index_of(to).map_or(1, |i| self.costs[i])
    }

    /// Straight-line hex distance.
    #[inline]
    pub fn distance(&self, from: Point, to: Point) -> i32 {
        hex_distance(from, to)
    }

    /// Whether the height difference between two tiles is climbable.
    /// Missing tiles are never passable.
    pub fn is_passable(&self, from: Point, to: Point) -> bool {
        match (self.tile(from), self.tile(to)) {
            (Some(a), Some(b)) => (a.height - b.height).abs() <= self.max_step,
            _ => false,
        }
    }

    /// Whether the tile at `p` exists and has `element` on top.
    #[inline]
    pub fn test_tile_element(&self, p: Point, element: Element) -> bool {
        self.tile(p).is_some_and(|t| t.top == element)
    }

    fn tile_mut(&mut self, p: Point) -> Option<&mut TileData> {
        self.bounds.index_of(p).map(|i| &mut self.tiles[i])
    }
}

fn parse_token(token: &str) -> Option<TileData> {
    let mut chars = token.chars();
    let top = Element::from_symbol(chars.next()?)?;
    let rest = chars.as_str();
    let (rest, blocked) = match rest.strip_suffix('#') {
        Some(r) => (r, true),
        None => (rest, false),
    };
    let height = if rest.is_empty() {
        0
    } else {
        rest.parse().ok()?
    };
    Some(TileData {
        top,
        height,
        blocked,
    })
}

/// Error returned by [`HexGrid::from_rows`] and when deserializing a
/// [`HexGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// A token that is not `<element><height>[#]`.
    BadToken { pos: Point, token: String },
    /// A row whose token count differs from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Tile or cost storage that does not cover the bounds exactly.
    SizeMismatch {
        expected: usize,
        tiles: usize,
        costs: usize,
    },
    /// A non-positive entry cost.
    BadCost { pos: Point, cost: i32 },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadToken { pos, token } => write!(f, "bad tile token {token:?} at {pos}"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} tiles, expected {expected}"),
            Self::SizeMismatch {
                expected,
                tiles,
                costs,
            } => write!(
                f,
                "grid needs {expected} tiles and costs, got {tiles} tiles and {costs} costs"
            ),
            Self::BadCost { pos, cost } => write!(f, "entry cost {cost} at {pos} is not positive"),
        }
    }
}

impl std::error::Error for GridParseError {}
