use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{Error, Result},
    grid::Percolation,
    stats,
};

////////////////////////////////////////////////////////////////////////////////

/// Two-sided 95% quantile of the standard normal distribution.
pub const CONFIDENCE_95: f64 = 1.96;

/// Opens uniformly random sites of a fresh `size`-by-`size` grid until it
/// percolates and returns the grid in that state.
///
/// Picking an already open site again is a no-op, so the loop ends after at
/// most `size * size` distinct sites are opened.
pub fn percolate<R: Rng>(size: usize, rng: &mut R) -> Result<Percolation> {
    let mut grid = Percolation::new(size)?;
    while !grid.percolates() {
        let row = rng.gen_range(1..=size);
        let col = rng.gen_range(1..=size);
        grid.open(row, col)?;
    }
    Ok(grid)
}

/// Runs one trial and returns the fraction of open sites at the moment the
/// grid starts to percolate.
pub fn run_trial<R: Rng>(size: usize, rng: &mut R) -> Result<f64> {
    let grid = percolate(size, rng)?;
    Ok(grid.number_of_open_sites() as f64 / (size * size) as f64)
}

////////////////////////////////////////////////////////////////////////////////

/// Percolation threshold estimate over independent trials.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    size: usize,
    fractions: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on a `size`-by-`size` grid.
    ///
    /// # Arguments
    ///
    /// * `size` - grid size, must be positive.
    /// * `trials` - number of trials, must be positive.
    /// * `rng` - source of site coordinates.
    pub fn new<R: Rng>(size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument("grid size must be positive"));
        }
        if trials == 0 {
            return Err(Error::InvalidArgument("number of trials must be positive"));
        }

        info!("running {trials} trials on a {size}x{size} grid");
        let mut fractions = Vec::with_capacity(trials);
        for trial in 0..trials {
            let fraction = run_trial(size, rng)?;
            debug!("trial {trial}: percolated at {fraction}");
            fractions.push(fraction);
        }

        let stats = Self { size, fractions };
        info!("estimated threshold: {}", stats.mean());
        Ok(stats)
    }

    /// Same as [`PercolationStats::new`], reproducible for a given `seed`.
    pub fn with_seed(size: usize, trials: usize, seed: u64) -> Result<Self> {
        Self::new(size, trials, &mut StdRng::seed_from_u64(seed))
    }

    /// Same as [`PercolationStats::new`] with the thread-local generator.
    pub fn from_entropy(size: usize, trials: usize) -> Result<Self> {
        Self::new(size, trials, &mut rand::thread_rng())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trials(&self) -> usize {
        self.fractions.len()
    }

    /// Fractions of open sites at the moment of percolation, one per trial.
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        // at least one trial is always recorded
        stats::mean(&self.fractions).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation of the percolation threshold.
    /// `None` for a single trial.
    pub fn stddev(&self) -> Option<f64> {
        stats::std_dev(&self.fractions)
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> Option<f64> {
        Some(self.mean() - self.half_width()?)
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> Option<f64> {
        Some(self.mean() + self.half_width()?)
    }

    /// Both endpoints of the 95% confidence interval.
    pub fn confidence(&self) -> Option<(f64, f64)> {
        Some((self.confidence_lo()?, self.confidence_hi()?))
    }

    fn half_width(&self) -> Option<f64> {
        Some(CONFIDENCE_95 * self.stddev()? / (self.trials() as f64).sqrt())
    }
}

////////////////////////////////////////////////////////////////////////////////
