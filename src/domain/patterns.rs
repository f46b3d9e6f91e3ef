use super::{CellStore, Position, mark_alive};

/// A named seed: live-cell offsets relative to the pattern's top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Bounding box as (width, height)
    pub fn extent(&self) -> (i32, i32) {
        let width = self.cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = self.cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        (width, height)
    }

    /// Absolute positions of the pattern's cells with its corner at `origin`
    pub fn positions(&self, origin: Position) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(move |&(dx, dy)| origin.offset(dx, dy))
    }

    /// Mark the pattern alive at `origin`; cells off the arena are dropped.
    /// Returns how many cells landed.
    pub fn place_on(&self, store: &mut CellStore, origin: Position) -> usize {
        mark_alive(store, self.positions(origin))
    }

    /// Place the pattern in the middle of a `width × height` arena
    pub fn place_centred(&self, store: &mut CellStore, width: usize, height: usize) -> usize {
        let (pw, ph) = self.extent();
        let origin = Position::new((width as i32 - pw) / 2, (height as i32 - ph) / 2);
        self.place_on(store, origin)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    pub const BLOCK: Pattern = Pattern {
        name: "block",
        description: "Still life",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "blinker",
        description: "Oscillator (period 2)",
        cells: &[(0, 1), (1, 1), (2, 1)],
    };

    pub const TOAD: Pattern = Pattern {
        name: "toad",
        description: "Oscillator (period 2)",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    };

    pub const BEACON: Pattern = Pattern {
        name: "beacon",
        description: "Oscillator (period 2)",
        cells: &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    };

    pub const GLIDER: Pattern = Pattern {
        name: "glider",
        description: "Moves diagonally (period 4)",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    };

    pub const LWSS: Pattern = Pattern {
        name: "lwss",
        description: "Lightweight spaceship (period 4)",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    pub const R_PENTOMINO: Pattern = Pattern {
        name: "r-pentomino",
        description: "Methuselah, settles after 1103 generations",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    };

    pub const ACORN: Pattern = Pattern {
        name: "acorn",
        description: "Methuselah, settles after 5206 generations",
        cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
    };

    pub const GLIDER_GUN: Pattern = Pattern {
        name: "glider-gun",
        description: "Gosper gun, emits a glider every 30 generations",
        cells: &[
            (0, 4), (0, 5), (1, 4), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6), (17, 5),
            (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    };

    pub const ALL: [Pattern; 9] = [
        BLOCK, BLINKER, TOAD, BEACON, GLIDER, LWSS, R_PENTOMINO, ACORN, GLIDER_GUN,
    ];

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        ALL.into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn names() -> Vec<&'static str> {
        ALL.iter().map(|p| p.name).collect()
    }
}
