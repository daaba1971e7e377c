use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct PlanningStatistics {
    /// Number of single state Bellman updates performed
    backups: i64,
    /// Number of iterations of the budget consumed
    iterations: i64,
    /// Largest value change seen in the most recent iteration
    last_max_change: f64,
    /// Time when planning started
    planning_start_time: Instant,
}

impl Default for PlanningStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningStatistics {
    pub fn new() -> Self {
        info!("starting planning");
        Self {
            backups: 0,
            iterations: 0,
            last_max_change: 0.,
            planning_start_time: Instant::now(),
        }
    }

    pub fn register_backup(&mut self, change: f64) {
        self.backups += 1;
        trace!(backups = self.backups, change);
    }

    /// Close an iteration of the budget in which values moved by at most
    /// `max_change`.
    pub fn finish_iteration(&mut self, max_change: f64) {
        self.iterations += 1;
        self.last_max_change = max_change;
        debug!(iteration = self.iterations, max_change);
    }

    pub fn backups(&self) -> i64 {
        self.backups
    }

    pub fn iterations(&self) -> i64 {
        self.iterations
    }

    pub fn last_max_change(&self) -> f64 {
        self.last_max_change
    }

    pub fn elapsed(&self) -> Duration {
        self.planning_start_time.elapsed()
    }

    pub fn finalise_planning(&self) {
        info!("finalising planning");
        info!(
            iterations = self.iterations,
            backups = self.backups,
            last_max_change = self.last_max_change,
        );
        let duration = Duration::from_millis(self.elapsed().as_millis() as u64);
        info!(planning_duration = %humantime::format_duration(duration));
    }
}
