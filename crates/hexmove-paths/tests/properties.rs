//! Randomized checks of both engines against a brute-force relaxation on
//! small grids.

use std::collections::HashMap;

use hexmove_core::{Element, ElementMask, HexGrid, Point, Range, TileData};
use hexmove_paths::{AStar, MoveRules, MovementRange, block};
use proptest::prelude::*;

const W: i32 = 5;
const H: i32 = 4;
const N: usize = (W * H) as usize;

const ELEMENTS: [Element; 6] = [
    Element::None,
    Element::Stone,
    Element::Water,
    Element::Vine,
    Element::Fire,
    Element::Lightning,
];

type Cell = (usize, i32, bool, i32);

fn cells() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(
        (0..ELEMENTS.len(), 0_i32..3, prop::bool::weighted(0.15), 1_i32..4),
        N,
    )
}

fn move_rules() -> impl Strategy<Value = MoveRules> {
    (0..ELEMENTS.len(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(e, water, stone, any_dest)| {
            MoveRules::new(ELEMENTS[e])
                .with_water(water)
                .with_stone_destination(stone)
                .with_any_destination(any_dest)
        },
    )
}

fn point(i: usize) -> Point {
    let bounds = Range::new(0, 0, W, H);
    bounds.iter().nth(i).unwrap_or(Point::ZERO)
}

fn build(cells: &[Cell]) -> HexGrid {
    let mut g = HexGrid::new(Range::new(0, 0, W, H), TileData::default());
    for (i, &(e, height, blocked, cost)) in cells.iter().enumerate() {
        let p = point(i);
        g.set_tile(
            p,
            TileData {
                top: ELEMENTS[e],
                height,
                blocked,
            },
        );
        g.set_cost(p, cost);
    }
    g
}

fn step_allowed(g: &HexGrid, start: Point, from: Point, to: Point, heights: bool) -> bool {
    if !heights || to == start {
        return true;
    }
    let tile = g.tile(to).unwrap();
    !tile.blocked && g.is_passable(from, to)
}

/// Bellman-Ford from `start`, expanding only tiles whose color matches `mask`.
fn brute_force(g: &HexGrid, start: Point, mask: ElementMask, heights: bool) -> HashMap<Point, i32> {
    let mut dist = HashMap::new();
    dist.insert(start, 0);
    let mut buf = Vec::new();
    for _ in 0..N {
        let mut changed = false;
        for u in g.bounds() {
            let Some(&du) = dist.get(&u) else {
                continue;
            };
            if !mask.matches(g.tile(u).unwrap().top) {
                continue;
            }
            buf.clear();
            g.neighbors(u, &mut buf);
            for &v in &buf {
                if !step_allowed(g, start, u, v, heights) {
                    continue;
                }
                let dv = du + g.cost(u, v);
                if dist.get(&v).is_none_or(|&old| dv < old) {
                    dist.insert(v, dv);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn astar_matches_brute_force(
        cells in cells(),
        s in 0..N,
        d in 0..N,
        mask_bits in 0_u8..32,
        heights in any::<bool>(),
    ) {
        let g = build(&cells);
        let (start, dest) = (point(s), point(d));
        let mask = ElementMask(mask_bits);
        let expected = brute_force(&g, start, mask, heights).get(&dest).copied();

        let mut astar = AStar::new();
        let path = if heights {
            astar.search(&g, start, dest, mask, block::height)
        } else {
            astar.search(&g, start, dest, mask, block::none)
        };

        match (path, expected) {
            (None, None) => {}
            (Some(path), Some(best)) => {
                prop_assert_eq!(path.last().copied().unwrap_or(start), dest);
                let mut prev = start;
                let mut cost = 0;
                for &step in &path {
                    prop_assert_eq!(prev.hex_distance(step), 1, "{} -> {} is not a step", prev, step);
                    prop_assert!(mask.matches(g.tile(prev).unwrap().top), "{} was not expandable", prev);
                    prop_assert!(step_allowed(&g, start, prev, step, heights), "{} -> {} is blocked", prev, step);
                    cost += g.cost(prev, step);
                    prev = step;
                }
                prop_assert_eq!(cost, best, "suboptimal path {:?}", path);
            }
            (got, want) => prop_assert!(false, "path {:?}, brute force cost {:?}", got, want),
        }
    }

    #[test]
    fn unrestricted_range_matches_brute_force(
        cells in cells(),
        o in 0..N,
        budget in 0_i32..7,
    ) {
        // Colorless tiles never match a mask; paint them stone so the whole
        // grid is walkable.
        let cells: Vec<Cell> = cells.into_iter().map(|(e, h, b, c)| (e.max(1), h, b, c)).collect();
        let g = build(&cells);
        let origin = point(o);
        let dist = brute_force(&g, origin, ElementMask::ANY, false);

        let mut range = MovementRange::new();
        let tiles = range.tiles_in_range(&g, origin, budget, ElementMask::ANY, ElementMask::ANY, block::none);

        let want = dist.values().filter(|&&c| c <= budget).count();
        prop_assert_eq!(tiles.len(), want);
        let mut last = 0;
        for n in &tiles {
            prop_assert_eq!(Some(n.cost), dist.get(&n.pos).copied(), "cost of {}", n.pos);
            prop_assert!(n.cost >= last, "costs out of order");
            last = n.cost;
        }
    }

    #[test]
    fn origin_is_always_ring_zero(
        cells in cells(),
        o in 0..N,
        budget in 0_i32..6,
        rules in move_rules(),
    ) {
        let g = build(&cells);
        let origin = point(o);
        let tiles = MovementRange::new().movement_range(&g, origin, budget, &rules);
        prop_assert_eq!(tiles.ring(0), vec![origin]);
        for n in &tiles {
            prop_assert!(n.cost <= budget);
            if n.pos != origin {
                prop_assert!(n.cost >= origin.hex_distance(n.pos));
            }
        }
    }

    #[test]
    fn larger_budget_reaches_a_superset(
        cells in cells(),
        o in 0..N,
        budget in 0_i32..6,
        rules in move_rules(),
    ) {
        let rules = rules.with_any_destination(false);
        let g = build(&cells);
        let origin = point(o);
        let mut range = MovementRange::new();
        let small = range.movement_range(&g, origin, budget, &rules);
        let large = range.movement_range(&g, origin, budget + 1, &rules);
        for n in &small {
            prop_assert_eq!(large.cost_of(n.pos), Some(n.cost), "{} lost with budget {}", n.pos, budget + 1);
        }
    }

    #[test]
    fn reused_engine_matches_fresh_engine(
        cells in cells(),
        queries in prop::collection::vec((0..N, 0..N), 1..6),
        rules in move_rules(),
    ) {
        let g = build(&cells);
        let mut shared = AStar::new();
        let mut shared_range = MovementRange::new();
        for (a, b) in queries {
            let (a, b) = (point(a), point(b));
            prop_assert_eq!(
                shared.path(&g, a, b, &rules),
                AStar::new().path(&g, a, b, &rules)
            );
            prop_assert_eq!(
                shared_range.movement_range(&g, a, 3, &rules),
                MovementRange::new().movement_range(&g, a, 3, &rules)
            );
        }
    }
}
