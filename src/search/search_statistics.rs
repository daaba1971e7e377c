use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes generated, including duplicates of seen states
    generated_nodes: i64,
    /// Number of states expanded again after a cheaper path was found
    reopened_nodes: i64,
    /// Number of frontier entries discarded because their state was closed
    pruned_nodes: i64,
    /// Number of edges on which the heuristic was found to be inconsistent
    inconsistent_edges: i64,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            pruned_nodes: 0,
            inconsistent_edges: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
        self.log_if_needed();
    }

    pub fn register_inconsistent_edge(&mut self, parent_h: f64, step_cost: f64, child_h: f64) {
        self.inconsistent_edges += 1;
        warn!(
            parent_h,
            step_cost, child_h, "heuristic is inconsistent on an edge, A* may lose optimality"
        );
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> i64 {
        self.reopened_nodes
    }

    pub fn pruned_nodes(&self) -> i64 {
        self.pruned_nodes
    }

    pub fn inconsistent_edges(&self) -> i64 {
        self.inconsistent_edges
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            pruned_nodes = self.pruned_nodes,
            inconsistent_edges = self.inconsistent_edges,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        // Sub-millisecond precision is noise in the logs.
        let duration = Duration::from_millis(self.elapsed().as_millis() as u64);
        info!(search_duration = %humantime::format_duration(duration));
    }
}
