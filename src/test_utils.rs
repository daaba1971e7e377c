use crate::mdp::TabularMdp;
use crate::search::{ExplicitGraph, Heuristic, HeuristicValue, SearchProblem, Successor};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use strum_macros::Display;

/// a -> {b: 1, c: 1}, b -> d: 1, c -> d: 5, goal d.
pub fn weighted_diamond_graph() -> ExplicitGraph {
    ExplicitGraph::new("a")
        .with_goal("d")
        .with_edge("a", "b", "a-b", 1.)
        .with_edge("a", "c", "a-c", 1.)
        .with_edge("b", "d", "b-d", 1.)
        .with_edge("c", "d", "c-d", 5.)
}

/// The diamond continued by d -> e: 1 and e -> f: 10, goal f only.
pub fn weighted_diamond_graph_with_tail() -> ExplicitGraph {
    let mut graph = ExplicitGraph::new("a")
        .with_goal("f")
        .with_edge("a", "b", "a-b", 1.)
        .with_edge("a", "c", "a-c", 1.)
        .with_edge("b", "d", "b-d", 1.)
        .with_edge("c", "d", "c-d", 5.);
    graph.add_edge("d", "e", "d-e", 1.);
    graph.add_edge("e", "f", "e-f", 10.);
    graph
}

/// s -> a -> b -> c -> g at cost 1 each, or s -> x -> g at cost 5 each.
pub fn long_cheap_short_expensive_graph() -> ExplicitGraph {
    ExplicitGraph::new("s")
        .with_goal("g")
        .with_edge("s", "a", "s-a", 1.)
        .with_edge("s", "x", "s-x", 5.)
        .with_edge("a", "b", "a-b", 1.)
        .with_edge("b", "c", "b-c", 1.)
        .with_edge("c", "g", "c-g", 1.)
        .with_edge("x", "g", "x-g", 5.)
}

/// A cycle a -> b -> c -> a; the goal z only has an edge out of it.
pub fn unreachable_goal_graph() -> ExplicitGraph {
    ExplicitGraph::new("a")
        .with_goal("z")
        .with_edge("a", "b", "a-b", 1.)
        .with_edge("b", "c", "b-c", 1.)
        .with_edge("c", "a", "c-a", 1.)
        .with_edge("z", "a", "z-a", 1.)
}

/// A -> B, A -> C and C -> G all labelled "move", goal G.
pub fn shared_label_graph() -> ExplicitGraph {
    ExplicitGraph::new("A")
        .with_goal("G")
        .with_edge("A", "B", "move", 1.)
        .with_edge("A", "C", "move", 1.)
        .with_edge("C", "G", "move", 1.)
}

/// Complete digraph over n0..n4 with the goal n5 behind n4.
pub fn dense_cyclic_graph() -> ExplicitGraph {
    let mut graph = ExplicitGraph::new("n0").with_goal("n5");
    for from in 0..5 {
        for to in 0..5 {
            if from != to {
                graph.add_edge(format!("n{from}"), format!("n{to}"), format!("n{from}-n{to}"), 1.);
            }
        }
    }
    graph.add_edge("n4", "n5", "n4-n5", 1.);
    graph
}

/// s -> a: 1, s -> b: 1, a -> c: 2, b -> c: 1, c -> g: 2 with the admissible
/// but inconsistent estimate h(b) = 3.
pub fn reopening_graph() -> ExplicitGraph {
    ExplicitGraph::new("s")
        .with_goal("g")
        .with_edge("s", "a", "s-a", 1.)
        .with_edge("s", "b", "s-b", 1.)
        .with_edge("a", "c", "a-c", 2.)
        .with_edge("b", "c", "b-c", 1.)
        .with_edge("c", "g", "c-g", 2.)
        .with_estimate("b", 3.)
}

/// 0 -> 1 -> ... -> length, one unit step per state.
#[derive(Debug, Clone)]
pub struct ChainProblem {
    length: usize,
}

pub fn chain_graph(length: usize) -> ChainProblem {
    ChainProblem { length }
}

impl SearchProblem for ChainProblem {
    type State = usize;
    type Action = usize;

    fn start_state(&self) -> usize {
        0
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.length
    }

    fn successors(&self, state: &usize) -> Vec<Successor<usize, usize>> {
        if *state < self.length {
            vec![Successor::new(state + 1, *state, 1.)]
        } else {
            vec![]
        }
    }

    fn cost_of_actions(&self, actions: &[usize]) -> f64 {
        actions.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// A four-connected grid with unit step costs, `(x, y)` coordinates and
/// north pointing towards larger `y`.
#[derive(Debug, Clone)]
pub struct OpenGrid {
    width: usize,
    height: usize,
    start: (usize, usize),
    goal: (usize, usize),
    walls: HashSet<(usize, usize)>,
}

impl OpenGrid {
    pub fn new(width: usize, height: usize, start: (usize, usize), goal: (usize, usize)) -> Self {
        Self {
            width,
            height,
            start,
            goal,
            walls: HashSet::new(),
        }
    }

    pub fn with_walls(mut self, walls: &[(usize, usize)]) -> Self {
        self.walls.extend(walls.iter().copied());
        self
    }

    fn step(&self, (x, y): (usize, usize), direction: Direction) -> Option<(usize, usize)> {
        let next = match direction {
            Direction::North if y + 1 < self.height => (x, y + 1),
            Direction::South if y > 0 => (x, y - 1),
            Direction::East if x + 1 < self.width => (x + 1, y),
            Direction::West if x > 0 => (x - 1, y),
            _ => return None,
        };
        (!self.walls.contains(&next)).then_some(next)
    }
}

impl SearchProblem for OpenGrid {
    type State = (usize, usize);
    type Action = Direction;

    fn start_state(&self) -> (usize, usize) {
        self.start
    }

    fn is_goal(&self, state: &(usize, usize)) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &(usize, usize)) -> Vec<Successor<(usize, usize), Direction>> {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
        .into_iter()
        .filter_map(|direction| {
            self.step(*state, direction)
                .map(|next| Successor::new(next, direction, 1.))
        })
        .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> f64 {
        let mut state = self.start;
        for &direction in actions {
            match self.step(state, direction) {
                Some(next) => state = next,
                None => return f64::INFINITY,
            }
        }
        actions.len() as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

pub fn manhattan_heuristic() -> ManhattanHeuristic {
    ManhattanHeuristic
}

impl Heuristic<OpenGrid> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &(usize, usize), problem: &OpenGrid) -> HeuristicValue {
        let (x, y) = *state;
        let (goal_x, goal_y) = problem.goal;
        ((x.abs_diff(goal_x) + y.abs_diff(goal_y)) as f64).into()
    }
}

/// Wraps a problem and counts how often each state is expanded.
#[derive(Debug)]
pub struct CountingProblem<P: SearchProblem> {
    problem: P,
    expansions: RefCell<HashMap<P::State, i64>>,
}

impl<P: SearchProblem> CountingProblem<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    pub fn max_expansions_of_any_state(&self) -> i64 {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }

    pub fn total_expansions(&self) -> i64 {
        self.expansions.borrow().values().sum()
    }
}

impl<P: SearchProblem> SearchProblem for CountingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn start_state(&self) -> P::State {
        self.problem.start_state()
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.problem.is_goal(state)
    }

    fn successors(&self, state: &P::State) -> Vec<Successor<P::State, P::Action>> {
        *self
            .expansions
            .borrow_mut()
            .entry(state.clone())
            .or_insert(0) += 1;
        self.problem.successors(state)
    }

    fn cost_of_actions(&self, actions: &[P::Action]) -> f64 {
        self.problem.cost_of_actions(actions)
    }
}

/// start --go--> end with probability 1 and reward 10, end is terminal.
pub fn two_state_terminal_mdp() -> TabularMdp {
    TabularMdp::new()
        .with_transition("start", "go", "end", 1., 10.)
        .with_terminal("end")
}

/// s0, s1, s2 in a row with the terminal goal after s2. `right` advances with
/// probability 0.8 and stays put otherwise, `left` moves back (s0 stays).
/// Reaching goal pays 1.
pub fn slippery_chain_mdp() -> TabularMdp {
    let states = ["s0", "s1", "s2", "goal"];
    let mut mdp = TabularMdp::new();
    for (index, state) in states.iter().take(3).enumerate() {
        let next = states[index + 1];
        let reward = if next == "goal" { 1. } else { 0. };
        mdp.add_transition(*state, "right", next, 0.8, reward);
        mdp.add_transition(*state, "right", *state, 0.2, 0.);
        let previous = states[index.saturating_sub(1)];
        mdp.add_transition(*state, "left", previous, 1., 0.);
    }
    mdp.with_terminal("goal")
}

/// Both actions out of fork are worth exactly the same.
pub fn tied_actions_mdp() -> TabularMdp {
    TabularMdp::new()
        .with_transition("fork", "left", "done", 1., 1.)
        .with_transition("fork", "right", "done", 1., 1.)
        .with_terminal("done")
}

/// A non-terminal state without any action.
pub fn dead_end_mdp() -> TabularMdp {
    TabularMdp::new().with_state("stuck")
}

/// a --go--> b --go--> end, reward 1 on the last step, with the states
/// listed as [b, a, end].
pub fn ordered_chain_mdp() -> TabularMdp {
    TabularMdp::new()
        .with_state("b")
        .with_state("a")
        .with_transition("a", "go", "b", 1., 0.)
        .with_transition("b", "go", "end", 1., 1.)
        .with_terminal("end")
}

/// `leaves` states that all lead into hub, which leads into the terminal
/// goal with reward 1.
pub fn sparse_fan_mdp(leaves: usize) -> TabularMdp {
    let mut mdp = TabularMdp::new();
    for leaf in 0..leaves {
        mdp.add_transition(format!("leaf{leaf}"), "go", "hub", 1., 0.);
    }
    mdp.add_transition("hub", "go", "goal", 1., 1.);
    mdp.with_terminal("goal")
}
