use log::trace;

use crate::{
    error::{Error, Result},
    union_find::UnionFind,
};

////////////////////////////////////////////////////////////////////////////////

/// 1-based `(row, col)` coordinates of a site.
pub type Site = (usize, usize);

/// An `n`-by-`n` grid of sites, each either blocked or open.
///
/// Site `(row, col)` has id `(row - 1) * n + col - 1`. Two disjoint-set
/// structures are kept over these ids:
///
/// * the percolation set has `n * n + 2` ids, the last two being the virtual
///   top and the virtual bottom. It only answers [`Percolation::percolates`].
/// * the fullness set has `n * n + 1` ids with the virtual top only. It only
///   answers [`Percolation::is_full`]. Without a virtual bottom, bottom row
///   sites are never joined to each other through it, so a site below an
///   unrelated percolating path is not reported as full.
#[derive(Debug, Clone)]
pub struct Percolation {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    percolation_set: UnionFind,
    fullness_set: UnionFind,
}

impl Percolation {
    /// Creates a grid with all sites blocked.
    ///
    /// # Arguments
    ///
    /// * `size` - number of rows (and columns), must be positive.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument("grid size must be positive"));
        }
        let sites = size
            .checked_mul(size)
            .and_then(|sites| sites.checked_add(2))
            .ok_or(Error::InvalidArgument("grid size is too large"))?
            - 2;

        Ok(Self {
            size,
            open: vec![false; sites],
            open_count: 0,
            percolation_set: UnionFind::new(sites + 2),
            fullness_set: UnionFind::new(sites + 1),
        })
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the id of a given site in both disjoint-set structures.
    pub fn site_index(&self, row: usize, col: usize) -> Result<usize> {
        self.check(row, col)?;
        Ok(self.linear_index(row, col))
    }

    /// Inverse of [`Percolation::site_index`].
    pub fn site_coords(&self, index: usize) -> Result<Site> {
        if index >= self.open.len() {
            return Err(Error::InvalidArgument("site index is outside of the grid"));
        }
        Ok((index / self.size + 1, index % self.size + 1))
    }

    /// Returns in-grid neighbours of a given site: up, down, left, right.
    pub fn neighbours(&self, row: usize, col: usize) -> Result<impl Iterator<Item = Site>> {
        self.check(row, col)?;
        let size = self.size as isize;

        Ok([(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 1 && r <= size && c >= 1 && c <= size {
                    return Some((r as usize, c as usize));
                }
                None
            }))
    }

    /// Opens a given site if it is not open already and joins it with its
    /// open neighbours.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.site_index(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;
        trace!("opened site ({row}, {col})");

        if row == 1 {
            let top = self.top();
            self.percolation_set.union(site, top);
            self.fullness_set.union(site, top);
        }
        if row == self.size {
            let bottom = self.bottom();
            self.percolation_set.union(site, bottom);
        }

        for (r, c) in self.neighbours(row, col)? {
            let neighbour = self.linear_index(r, c);
            if self.open[neighbour] {
                self.percolation_set.union(site, neighbour);
                self.fullness_set.union(site, neighbour);
            }
        }

        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site_index(row, col)?;
        Ok(self.open[site])
    }

    /// Returns `true` if a given site is connected to the top row through
    /// a chain of open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.site_index(row, col)?;
        Ok(self.fullness_set.root(site) == self.fullness_set.root(self.top()))
    }

    /// Returns `true` if some chain of open sites connects the top row
    /// with the bottom row.
    pub fn percolates(&self) -> bool {
        self.percolation_set.root(self.top()) == self.percolation_set.root(self.bottom())
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    pub fn percolation_set(&self) -> &UnionFind {
        &self.percolation_set
    }

    pub fn fullness_set(&self) -> &UnionFind {
        &self.fullness_set
    }

    fn top(&self) -> usize {
        self.open.len()
    }

    fn bottom(&self) -> usize {
        self.open.len() + 1
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row < 1 || row > self.size || col < 1 || col > self.size {
            return Err(Error::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    fn linear_index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + col - 1
    }
}

////////////////////////////////////////////////////////////////////////////////
