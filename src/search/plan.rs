//! A plan is a sequence of actions that can be executed to achieve a goal. This
//! module provides the [`Plan`] struct, which represents a plan.

use crate::search::SearchProblem;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<A> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The cost of the plan as reported by the problem.
    pub fn cost<P>(&self, problem: &P) -> f64
    where
        P: SearchProblem<Action = A>,
    {
        problem.cost_of_actions(&self.steps)
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(steps: Vec<A>) -> Self {
        Self::new(steps)
    }
}
