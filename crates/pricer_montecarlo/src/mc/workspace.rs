//! Pre-allocated workspace buffers for Monte Carlo simulation.
//!
//! # Memory Layout
//!
//! - `shocks`: n_steps (normal draws for the path being generated)
//! - `paths`: n_paths × (n_steps + 1), see [`PathSet`]
//! - `call_payoffs`, `put_payoffs`: n_paths

use super::paths::PathSet;

/// Reusable buffers for path generation and payoff evaluation.
///
/// Buffers grow on demand and keep their capacity between runs. The path
/// buffer can be handed out with [`take_paths`](Self::take_paths); it is
/// reallocated on the next run.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(1000, 100);
/// assert_eq!(workspace.n_paths(), 1000);
/// assert_eq!(workspace.shocks().len(), 100);
/// ```
#[derive(Debug, Default)]
pub struct PathWorkspace {
    shocks: Vec<f64>,
    paths: PathSet,
    call_payoffs: Vec<f64>,
    put_payoffs: Vec<f64>,
}

impl PathWorkspace {
    /// Creates a workspace sized for the given dimensions.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        Self {
            shocks: vec![0.0; n_steps],
            paths: PathSet::zeros(n_paths, n_steps),
            call_payoffs: vec![0.0; n_paths],
            put_payoffs: vec![0.0; n_paths],
        }
    }

    /// Resizes buffers for the given dimensions.
    ///
    /// Payoff and shock buffers keep their allocation; the path buffer is
    /// rebuilt only when its shape changed or it was taken.
    pub fn prepare(&mut self, n_paths: usize, n_steps: usize) {
        self.shocks.resize(n_steps, 0.0);
        self.call_payoffs.resize(n_paths, 0.0);
        self.put_payoffs.resize(n_paths, 0.0);

        if self.paths.len() != n_paths || self.paths.n_steps() != n_steps {
            self.paths = PathSet::zeros(n_paths, n_steps);
        }
    }

    /// Number of paths the workspace is currently shaped for.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.paths.len()
    }

    /// Shock buffer for one path.
    #[inline]
    pub fn shocks(&self) -> &[f64] {
        &self.shocks
    }

    /// Generated paths.
    #[inline]
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    /// Moves the generated paths out, leaving an empty set behind.
    #[inline]
    pub fn take_paths(&mut self) -> PathSet {
        std::mem::take(&mut self.paths)
    }

    /// Call payoff buffer.
    #[inline]
    pub fn call_payoffs(&self) -> &[f64] {
        &self.call_payoffs
    }

    /// Put payoff buffer.
    #[inline]
    pub fn put_payoffs(&self) -> &[f64] {
        &self.put_payoffs
    }

    #[inline]
    pub(crate) fn paths_mut_and_shocks(&mut self) -> (&mut PathSet, &mut [f64]) {
        (&mut self.paths, &mut self.shocks)
    }

    #[inline]
    pub(crate) fn paths_and_payoffs_mut(&mut self) -> (&PathSet, &mut [f64], &mut [f64]) {
        (&self.paths, &mut self.call_payoffs, &mut self.put_payoffs)
    }
}
