//! An explicitly listed weighted graph, loadable from TOML or JSON. This is
//! the simplest way to hand a problem to the search engines without writing a
//! [`SearchProblem`] implementation.

use crate::config::{load_from_path, ConfigError};
use crate::search::{Heuristic, HeuristicValue, SearchProblem, Successor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub action: String,
    #[serde(default = "default_edge_cost")]
    pub cost: f64,
}

fn default_edge_cost() -> f64 {
    1.
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
struct GraphDescription {
    start: String,
    goals: Vec<String>,
    #[serde(default)]
    edges: Vec<Edge>,
    /// Optional per-state heuristic estimates, missing states count as 0.
    #[serde(default)]
    heuristic: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(from = "GraphDescription", into = "GraphDescription")]
pub struct ExplicitGraph {
    start: String,
    goals: HashSet<String>,
    edges: Vec<Edge>,
    heuristic: HashMap<String, f64>,
    /// Outgoing edge indices per state, in declaration order.
    adjacency: IndexMap<String, Vec<usize>>,
}

impl From<GraphDescription> for ExplicitGraph {
    fn from(description: GraphDescription) -> Self {
        let mut graph = ExplicitGraph::new(description.start);
        for goal in description.goals {
            graph.add_goal(goal);
        }
        for edge in description.edges {
            graph.add_edge(edge.from, edge.to, edge.action, edge.cost);
        }
        graph.heuristic = description.heuristic;
        graph
    }
}

impl From<ExplicitGraph> for GraphDescription {
    fn from(graph: ExplicitGraph) -> Self {
        let mut goals: Vec<String> = graph.goals.into_iter().collect();
        goals.sort();
        GraphDescription {
            start: graph.start,
            goals,
            edges: graph.edges,
            heuristic: graph.heuristic,
        }
    }
}

impl ExplicitGraph {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goals: HashSet::new(),
            edges: Vec::new(),
            heuristic: HashMap::new(),
            adjacency: IndexMap::new(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        load_from_path(path)
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.add_goal(goal);
        self
    }

    pub fn with_edge(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        action: impl Into<String>,
        cost: f64,
    ) -> Self {
        self.add_edge(from, to, action, cost);
        self
    }

    pub fn with_estimate(mut self, state: impl Into<String>, estimate: f64) -> Self {
        self.heuristic.insert(state.into(), estimate);
        self
    }

    pub fn add_goal(&mut self, goal: impl Into<String>) {
        self.goals.insert(goal.into());
    }

    pub fn add_edge(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        action: impl Into<String>,
        cost: f64,
    ) {
        let edge = Edge {
            from: from.into(),
            to: to.into(),
            action: action.into(),
            cost,
        };
        self.adjacency
            .entry(edge.from.clone())
            .or_default()
            .push(self.edges.len());
        self.edges.push(edge);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn outgoing(&self, state: &str) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(state)
            .into_iter()
            .flatten()
            .map(|&index| &self.edges[index])
    }

    /// The heuristic given by the estimates stored in the graph.
    pub fn table_heuristic(&self) -> TableHeuristic {
        TableHeuristic {
            estimates: self.heuristic.clone(),
        }
    }
}

impl SearchProblem for ExplicitGraph {
    type State = String;
    type Action = String;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, String>> {
        self.outgoing(state)
            .map(|edge| Successor::new(edge.to.clone(), edge.action.clone(), edge.cost))
            .collect()
    }

    /// Replays the actions from the start state. Edges out of a state may
    /// share an action, so this is the cost of the cheapest replay. A
    /// sequence that cannot be replayed costs infinity.
    fn cost_of_actions(&self, actions: &[String]) -> f64 {
        let mut reached: IndexMap<&str, f64> = IndexMap::from([(self.start.as_str(), 0.)]);
        for action in actions {
            let mut next_reached: IndexMap<&str, f64> = IndexMap::new();
            for (&state, &cost) in &reached {
                for edge in self.outgoing(state).filter(|edge| &edge.action == action) {
                    let total = cost + edge.cost;
                    next_reached
                        .entry(edge.to.as_str())
                        .and_modify(|best| *best = best.min(total))
                        .or_insert(total);
                }
            }
            if next_reached.is_empty() {
                return f64::INFINITY;
            }
            reached = next_reached;
        }
        reached.values().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Looks estimates up in a table, states without an entry are estimated at 0.
#[derive(Debug, Clone, Default)]
pub struct TableHeuristic {
    estimates: HashMap<String, f64>,
}

impl Heuristic<ExplicitGraph> for TableHeuristic {
    fn evaluate(&mut self, state: &String, _problem: &ExplicitGraph) -> HeuristicValue {
        self.estimates.get(state).copied().unwrap_or(0.).into()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum GraphHeuristicName {
    #[clap(help = "The zero heuristic.")]
    Zero,
    #[clap(help = "The estimates listed in the graph file.")]
    Table,
}

impl GraphHeuristicName {
    pub fn create(&self, graph: &ExplicitGraph) -> Box<dyn Heuristic<ExplicitGraph>> {
        match self {
            GraphHeuristicName::Zero => Box::new(crate::search::ZeroHeuristic::new()),
            GraphHeuristicName::Table => Box::new(graph.table_heuristic()),
        }
    }
}
