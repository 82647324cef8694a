// patterns.rs - Named seed patterns and random fill

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ParseError;
use crate::grid::{Cell, Grid};

pub struct Pattern {
    pub name: &'static str,
    pub board: &'static str, // ASCII board, see `Grid::from_str`
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        board: "
            .o.
            ..o
            ooo",
    },
    Pattern {
        name: "Blinker",
        board: "ooo",
    },
    Pattern {
        name: "Toad",
        board: "
            .ooo
            ooo.",
    },
    Pattern {
        name: "Beacon",
        board: "
            oo..
            oo..
            ..oo
            ..oo",
    },
    Pattern {
        name: "Pulsar",
        board: "
            ..ooo...ooo..
            .............
            o....o.o....o
            o....o.o....o
            o....o.o....o
            ..ooo...ooo..
            .............
            ..ooo...ooo..
            o....o.o....o
            o....o.o....o
            o....o.o....o
            .............
            ..ooo...ooo..",
    },
    Pattern {
        name: "R-pentomino",
        board: "
            .oo
            oo.
            .o.",
    },
    Pattern {
        name: "Gosper Glider Gun",
        board: "
            ........................o...........
            ......................o.o...........
            ............oo......oo............oo
            ...........o...o....oo............oo
            oo........o.....o...oo..............
            oo........o...o.oo....o.o...........
            ..........o.....o.......o...........
            ...........o...o....................
            ............oo......................",
    },
];

impl Pattern {
    pub fn to_grid(&self) -> Result<Grid, ParseError> {
        self.board.parse()
    }
}

/// Clears `grid` and stamps `pattern` centered on it. Cells that fall off
/// the grid are dropped. Returns how many cells were placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> Result<usize, ParseError> {
    let stamp = pattern.to_grid()?;
    grid.clear();

    let offset_x = grid.width() as isize / 2 - stamp.width() as isize / 2;
    let offset_y = grid.height() as isize / 2 - stamp.height() as isize / 2;
    let mut placed = 0;
    for (x, y) in stamp.live_cells() {
        let (Some(gx), Some(gy)) = (
            x.checked_add_signed(offset_x),
            y.checked_add_signed(offset_y),
        ) else {
            continue;
        };
        if grid.set(gx, gy, Cell::Alive).is_ok() {
            placed += 1;
        }
    }
    Ok(placed)
}

/// Replaces the whole grid with noise: each cell alive with probability 1/3.
pub fn apply_random_pattern(grid: &mut Grid, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    grid.fill_with(|_, _| if rng.gen_ratio(1, 3) { Cell::Alive } else { Cell::Dead });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_parse() {
        for pattern in PATTERNS {
            let grid = pattern.to_grid().unwrap();
            assert!(grid.live_count() > 0, "{} is empty", pattern.name);
        }
    }

    #[test]
    fn test_pattern_is_centered() {
        let mut grid = Grid::new(9, 9).unwrap();
        grid.toggle(0, 0).unwrap();
        let blinker = &PATTERNS[1];
        assert_eq!(apply_pattern(&mut grid, blinker), Ok(3));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn test_oversized_pattern_is_clipped() {
        let mut grid = Grid::new(10, 5).unwrap();
        let gun = PATTERNS.iter().find(|p| p.name == "Gosper Glider Gun").unwrap();
        let placed = apply_pattern(&mut grid, gun).unwrap();
        assert_eq!(placed, grid.live_count());
        assert!(placed < gun.to_grid().unwrap().live_count());
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let mut grid = Grid::new(17, 17).unwrap();
        apply_pattern(&mut grid, &PATTERNS[4]).unwrap();
        let start = grid.clone();
        let one = start.step();
        assert_ne!(one, start);
        assert_eq!(one.step().step(), start);
    }

    #[test]
    fn test_bad_board_is_reported() {
        let broken = Pattern { name: "Broken", board: "o?o" };
        let mut grid = Grid::new(5, 5).unwrap();
        grid.toggle(0, 0).unwrap();
        assert_eq!(
            apply_pattern(&mut grid, &broken),
            Err(ParseError::UnexpectedChar { ch: '?', x: 1, y: 0 })
        );
        // Nothing is touched when the board does not parse.
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        apply_random_pattern(&mut a, 7);
        apply_random_pattern(&mut b, 7);
        assert_eq!(a, b);
        assert!(a.live_count() > 0 && a.live_count() < 400);

        // Every cell is overwritten, including ones alive before.
        let mut c = Grid::new(20, 20).unwrap();
        c.fill_with(|_, _| Cell::Alive);
        apply_random_pattern(&mut c, 7);
        assert_eq!(c, a);
    }
}
