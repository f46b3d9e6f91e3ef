//! Moore-neighbourhood geometry.
//!
//! Two views of the same relation: the enumerated neighbourhood of a
//! position, and a pairwise adjacency predicate. Neither knows about arena
//! bounds; positions outside the arena are simply never alive.

use super::Position;

/// Offsets of the eight surrounding cells, row by row
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// The eight positions at Chebyshev distance 1 from `pos`.
/// Both coordinates of `pos` must lie in `i32::MIN + 1..=i32::MAX - 1`.
pub fn possible_neighbors(pos: Position) -> [Position; 8] {
    MOORE_OFFSETS.map(|(dx, dy)| pos.offset(dx, dy))
}

/// True iff `a` and `b` are distinct and differ by at most one on each axis
pub fn is_neighbor(a: Position, b: Position) -> bool {
    a != b && a.x.abs_diff(b.x) <= 1 && a.y.abs_diff(b.y) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn window() -> impl Iterator<Item = Position> {
        (-3..=3).flat_map(|x| (-3..=3).map(move |y| Position::new(x, y)))
    }

    #[test]
    fn test_compass_directions_are_neighbors() {
        let centre = Position::new(5, 5);
        let around = [
            (5, 6), (5, 4), (6, 5), (4, 5),
            (6, 6), (4, 6), (6, 4), (4, 4),
        ];
        for (x, y) in around {
            let other = Position::new(x, y);
            assert!(is_neighbor(centre, other), "{} should neighbour {}", other, centre);
        }
    }

    #[test]
    fn test_distance_two_is_not_neighbor() {
        assert!(!is_neighbor(Position::new(5, 5), Position::new(3, 5)));
        assert!(!is_neighbor(Position::new(5, 5), Position::new(7, 7)));
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        for a in window() {
            for b in window() {
                assert_eq!(is_neighbor(a, b), is_neighbor(b, a), "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn test_self_is_never_a_neighbor() {
        for a in window() {
            assert!(!is_neighbor(a, a));
        }
    }

    #[test]
    fn test_predicate_agrees_with_neighborhood() {
        for a in window() {
            let hood: HashSet<Position> = possible_neighbors(a).into_iter().collect();
            for b in window() {
                assert_eq!(is_neighbor(a, b), hood.contains(&b), "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn test_neighborhood_has_eight_distinct_cells_at_distance_one() {
        for p in window() {
            let hood: HashSet<Position> = possible_neighbors(p).into_iter().collect();
            assert_eq!(hood.len(), 8);
            for n in hood {
                let chebyshev = p.x.abs_diff(n.x).max(p.y.abs_diff(n.y));
                assert_eq!(chebyshev, 1, "{} from {}", n, p);
            }
        }
    }

    #[test]
    fn test_neighborhood_ignores_arena_bounds() {
        let hood = possible_neighbors(Position::new(0, 0));
        assert!(hood.contains(&Position::new(-1, -1)));
        assert!(hood.contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_neighborhood_at_largest_coordinate() {
        let far = Position::new(i32::MAX - 1, i32::MAX - 1);
        let hood = possible_neighbors(far);
        assert!(hood.contains(&Position::new(i32::MAX, i32::MAX)));
        assert!(hood.iter().all(|&n| is_neighbor(far, n)));
    }
}
