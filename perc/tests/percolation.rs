use std::collections::VecDeque;

use perc::{Error, Percolation, Site};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

/// Breadth-first flood fill from every open top row site.
/// Returns the set of full sites as a row-major mask.
fn flood(open: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let n = open.len();
    let mut full = vec![vec![false; n]; n];
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

    for col in 0..n {
        if open[0][col] {
            full[0][col] = true;
            queue.push_back((0, col));
        }
    }

    while let Some((row, col)) = queue.pop_front() {
        let candidates = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in candidates {
            if r < n && c < n && open[r][c] && !full[r][c] {
                full[r][c] = true;
                queue.push_back((r, c));
            }
        }
    }

    full
}

fn open_all(grid: &mut Percolation, sites: &[Site]) {
    for &(row, col) in sites {
        grid.open(row, col).unwrap();
    }
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn right_column() {
    let mut grid = Percolation::new(3).unwrap();
    open_all(&mut grid, &[(1, 3), (2, 3), (3, 3)]);

    assert!(grid.percolates());
    assert!(grid.is_full(3, 3).unwrap());
    assert!(!grid.is_full(3, 1).unwrap());
}

#[test]
fn bottom_row_is_not_full() {
    let mut grid = Percolation::new(3).unwrap();
    open_all(&mut grid, &[(3, 1), (3, 2), (3, 3)]);

    assert!(!grid.percolates());
    for col in 1..=3 {
        assert!(grid.is_open(3, col).unwrap());
        assert!(!grid.is_full(3, col).unwrap());
    }
}

#[test]
fn winding_path() {
    // . # # # #
    // . . . # #
    // # # . # #
    // # . . # .
    // # . # # .
    let mut grid = Percolation::new(5).unwrap();
    open_all(
        &mut grid,
        &[(1, 1), (2, 1), (2, 2), (2, 3), (3, 3), (4, 3), (4, 2), (4, 5)],
    );
    assert!(!grid.percolates());
    assert!(grid.is_full(4, 2).unwrap());
    assert!(!grid.is_full(4, 5).unwrap());

    grid.open(5, 5).unwrap();
    assert!(!grid.percolates());
    assert!(!grid.is_full(5, 5).unwrap());

    grid.open(5, 2).unwrap();
    assert!(grid.percolates());
    assert!(grid.is_full(5, 2).unwrap());
    assert!(!grid.is_full(5, 5).unwrap());
    assert_eq!(grid.number_of_open_sites(), 10);
}

#[test]
fn open_twice_changes_nothing() {
    let sites = [(1, 2), (2, 2), (3, 2), (3, 3), (4, 1)];

    let mut once = Percolation::new(4).unwrap();
    open_all(&mut once, &sites);
    let mut twice = Percolation::new(4).unwrap();
    open_all(&mut twice, &sites);
    open_all(&mut twice, &sites);

    assert_eq!(once.number_of_open_sites(), twice.number_of_open_sites());
    assert_eq!(once.percolates(), twice.percolates());
    for row in 1..=4 {
        for col in 1..=4 {
            assert_eq!(once.is_open(row, col), twice.is_open(row, col));
            assert_eq!(once.is_full(row, col), twice.is_full(row, col));
        }
    }
}

#[test]
fn errors_leave_state_untouched() {
    let mut grid = Percolation::new(2).unwrap();
    grid.open(1, 1).unwrap();

    assert_eq!(
        grid.open(3, 1),
        Err(Error::OutOfRange {
            row: 3,
            col: 1,
            size: 2
        })
    );
    assert!(grid.is_open(0, 0).is_err());
    assert!(grid.is_full(2, 3).is_err());
    assert_eq!(grid.number_of_open_sites(), 1);
    assert!(grid.is_full(1, 1).unwrap());
    assert_eq!(
        Error::OutOfRange {
            row: 3,
            col: 1,
            size: 2
        }
        .to_string(),
        "site (3, 1) is outside of the 2x2 grid"
    );
}

#[test]
fn matches_flood_fill() {
    let mut rng = StdRng::seed_from_u64(2024);

    for n in 1..=8 {
        for _ in 0..20 {
            let mut grid = Percolation::new(n).unwrap();
            let mut open = vec![vec![false; n]; n];
            let mut opened = 0;

            for _ in 0..n * n {
                let (row, col) = (rng.gen_range(1..=n), rng.gen_range(1..=n));
                grid.open(row, col).unwrap();
                if !open[row - 1][col - 1] {
                    open[row - 1][col - 1] = true;
                    opened += 1;
                }
                assert_eq!(grid.number_of_open_sites(), opened);

                let full = flood(&open);
                for r in 1..=n {
                    for c in 1..=n {
                        assert_eq!(grid.is_open(r, c).unwrap(), open[r - 1][c - 1]);
                        assert_eq!(grid.is_full(r, c).unwrap(), full[r - 1][c - 1]);
                    }
                }
                assert_eq!(grid.percolates(), full[n - 1].iter().any(|&f| f));
            }
        }
    }
}
