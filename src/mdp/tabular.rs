//! An MDP given as an explicit transition table, loadable from TOML or JSON.

use crate::config::{load_from_path, ConfigError};
use crate::mdp::Mdp;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Outcome {
    pub next: String,
    pub probability: f64,
    #[serde(default)]
    pub reward: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
struct TransitionDescription {
    state: String,
    action: String,
    outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
struct MdpDescription {
    /// States listed up front, fixing the enumeration order. States that only
    /// appear in transitions are appended in the order they are met.
    #[serde(default)]
    states: Vec<String>,
    #[serde(default)]
    terminals: Vec<String>,
    #[serde(default)]
    transitions: Vec<TransitionDescription>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(from = "MdpDescription", into = "MdpDescription")]
pub struct TabularMdp {
    states: IndexSet<String>,
    terminals: HashSet<String>,
    /// Outcomes per state and action, actions in declaration order.
    table: IndexMap<String, IndexMap<String, Vec<Outcome>>>,
}

impl From<MdpDescription> for TabularMdp {
    fn from(description: MdpDescription) -> Self {
        let mut mdp = TabularMdp::new();
        for state in description.states {
            mdp.add_state(state);
        }
        for transition in description.transitions {
            for outcome in transition.outcomes {
                mdp.add_transition(
                    transition.state.clone(),
                    transition.action.clone(),
                    outcome.next,
                    outcome.probability,
                    outcome.reward,
                );
            }
        }
        for terminal in description.terminals {
            mdp.add_terminal(terminal);
        }
        mdp
    }
}

impl From<TabularMdp> for MdpDescription {
    fn from(mdp: TabularMdp) -> Self {
        let terminals = mdp
            .states
            .iter()
            .filter(|state| mdp.terminals.contains(*state))
            .cloned()
            .collect();
        let transitions = mdp
            .table
            .into_iter()
            .flat_map(|(state, actions)| {
                actions
                    .into_iter()
                    .map(move |(action, outcomes)| TransitionDescription {
                        state: state.clone(),
                        action,
                        outcomes,
                    })
            })
            .collect();
        MdpDescription {
            states: mdp.states.into_iter().collect(),
            terminals,
            transitions,
        }
    }
}

impl TabularMdp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        load_from_path(path)
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.add_state(state);
        self
    }

    pub fn with_terminal(mut self, state: impl Into<String>) -> Self {
        self.add_terminal(state);
        self
    }

    pub fn with_transition(
        mut self,
        state: impl Into<String>,
        action: impl Into<String>,
        next: impl Into<String>,
        probability: f64,
        reward: f64,
    ) -> Self {
        self.add_transition(state, action, next, probability, reward);
        self
    }

    pub fn add_state(&mut self, state: impl Into<String>) {
        self.states.insert(state.into());
    }

    pub fn add_terminal(&mut self, state: impl Into<String>) {
        let state = state.into();
        self.states.insert(state.clone());
        self.terminals.insert(state);
    }

    /// Add one outcome of taking `action` in `state`. A second outcome
    /// leading to the same next state is merged into the first: the
    /// probabilities add up and the reward becomes their probability weighted
    /// mean, which leaves every Q-value unchanged.
    pub fn add_transition(
        &mut self,
        state: impl Into<String>,
        action: impl Into<String>,
        next: impl Into<String>,
        probability: f64,
        reward: f64,
    ) {
        let state = state.into();
        let next = next.into();
        self.states.insert(state.clone());
        self.states.insert(next.clone());
        let outcomes = self
            .table
            .entry(state)
            .or_default()
            .entry(action.into())
            .or_default();
        match outcomes.iter_mut().find(|outcome| outcome.next == next) {
            Some(outcome) => {
                let total = outcome.probability + probability;
                if total > 0. {
                    outcome.reward =
                        (outcome.probability * outcome.reward + probability * reward) / total;
                }
                outcome.probability = total;
            }
            None => outcomes.push(Outcome {
                next,
                probability,
                reward,
            }),
        }
    }

    fn outcomes(&self, state: &str, action: &str) -> &[Outcome] {
        self.table
            .get(state)
            .and_then(|actions| actions.get(action))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Mdp for TabularMdp {
    type State = String;
    type Action = String;

    fn states(&self) -> Vec<String> {
        self.states.iter().cloned().collect()
    }

    fn actions(&self, state: &String) -> Vec<String> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        self.table
            .get(state)
            .map(|actions| actions.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn transitions(&self, state: &String, action: &String) -> Vec<(String, f64)> {
        self.outcomes(state, action)
            .iter()
            .map(|outcome| (outcome.next.clone(), outcome.probability))
            .collect()
    }

    /// The reward of the outcome leading to `next_state`, 0 if there is none.
    fn reward(&self, state: &String, action: &String, next_state: &String) -> f64 {
        self.outcomes(state, action)
            .iter()
            .find(|outcome| &outcome.next == next_state)
            .map_or(0., |outcome| outcome.reward)
    }

    fn is_terminal(&self, state: &String) -> bool {
        self.terminals.contains(state)
    }
}
