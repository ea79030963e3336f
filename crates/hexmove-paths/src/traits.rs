use hexmove_core::{Element, HexGrid, Point, TileData, hex_distance};

/// Everything the search engines need to know about the map.
///
/// The engines only ever query coordinates that came from the search start
/// or from [`neighbors`](Self::neighbors), so implementations only have to
/// answer for in-bounds tiles.
pub trait GridOracle {
    /// Tile data at `p`, or `None` if there is no tile.
    fn tile(&self, p: Point) -> Option<&TileData>;

    /// Append the in-bounds neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;

    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn distance(&self, from: Point, to: Point) -> i32 {
        hex_distance(from, to)
    }

    /// Whether the height difference allows stepping from `from` to
    /// adjacent `to`.
    fn is_passable(&self, from: Point, to: Point) -> bool;

    /// Whether the tile at `p` has `element` on top.
    fn test_tile_element(&self, p: Point, element: Element) -> bool {
        self.tile(p).is_some_and(|t| t.top == element)
    }
}

impl GridOracle for HexGrid {
    #[inline]
    fn tile(&self, p: Point) -> Option<&TileData> {
        HexGrid::tile(self, p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        HexGrid::neighbors(self, p, buf);
    }

    #[inline]
    fn cost(&self, from: Point, to: Point) -> i32 {
        HexGrid::cost(self, from, to)
    }

    #[inline]
    fn distance(&self, from: Point, to: Point) -> i32 {
        HexGrid::distance(self, from, to)
    }

    #[inline]
    fn is_passable(&self, from: Point, to: Point) -> bool {
        HexGrid::is_passable(self, from, to)
    }

    #[inline]
    fn test_tile_element(&self, p: Point, element: Element) -> bool {
        HexGrid::test_tile_element(self, p, element)
    }
}
