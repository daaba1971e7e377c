use crate::config::{load_from_path, ConfigError};
use crate::mdp::{
    agents::{
        AsynchronousValueIterationAgent, PrioritizedSweepingAgent, ValueEstimationAgent,
        ValueIterationAgent,
    },
    Mdp, PlanningError,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum_macros::{Display, EnumIter};

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlanningVariant {
    #[clap(help = "Synchronous value iteration, one batch sweep per iteration.")]
    #[default]
    Sync,
    #[clap(help = "Cyclic value iteration, one in-place state update per iteration.")]
    Async,
    #[clap(help = "Prioritized sweeping, one update of the state with the largest residual \
    per iteration.")]
    Prioritized,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlanningConfig {
    #[serde(default)]
    pub variant: PlanningVariant,
    #[serde(default = "default_discount")]
    pub discount: f64,
    /// The iteration budget. What an iteration is depends on the variant.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Residual threshold for queueing predecessors, only used by
    /// prioritized sweeping.
    #[serde(default = "default_theta")]
    pub theta: f64,
}

fn default_discount() -> f64 {
    0.9
}

fn default_iterations() -> usize {
    100
}

fn default_theta() -> f64 {
    1e-5
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            variant: PlanningVariant::default(),
            discount: default_discount(),
            iterations: default_iterations(),
            theta: default_theta(),
        }
    }
}

impl PlanningConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        load_from_path(path)
    }

    /// Run the configured planner on `mdp`.
    pub fn build_agent<'a, M: Mdp>(
        &self,
        mdp: &'a M,
    ) -> Result<Box<dyn ValueEstimationAgent<M> + 'a>, PlanningError> {
        Ok(match self.variant {
            PlanningVariant::Sync => Box::new(ValueIterationAgent::new(
                mdp,
                self.discount,
                self.iterations,
            )?),
            PlanningVariant::Async => Box::new(AsynchronousValueIterationAgent::new(
                mdp,
                self.discount,
                self.iterations,
            )?),
            PlanningVariant::Prioritized => Box::new(PrioritizedSweepingAgent::new(
                mdp,
                self.discount,
                self.iterations,
                self.theta,
            )?),
        })
    }
}
