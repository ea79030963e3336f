//! **hexmove-core** — value types for movement on hex grids.
//!
//! This crate provides the types shared by the search engines in
//! `hexmove-paths`: axial hex coordinates, terrain colors and color masks,
//! per-tile data, and [`HexGrid`], an in-memory hex map that can answer
//! every query the engines make.

pub mod element;
pub mod geom;
pub mod grid;
pub mod tile;

pub use element::{Element, ElementMask};
pub use geom::{HEX_DIRECTIONS, Point, Range, RangeIter, hex_distance};
pub use grid::{DEFAULT_MAX_STEP, GridParseError, HexGrid};
pub use tile::TileData;
