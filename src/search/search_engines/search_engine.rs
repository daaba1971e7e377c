use crate::search::{
    search_engines::{AStar, BFS, DFS, UCS},
    Heuristic, Plan, SearchProblem, SearchStatistics,
};
use clap;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal. All engines are
    /// complete on finite state spaces, so this means no plan exists.
    ProvablyUnsolvable,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::ProvablyUnsolvable => None,
        }
    }
}

pub trait SearchEngine<P: SearchProblem> {
    /// Search for a plan from the start state of `problem` to a goal.
    /// Engines that are not informed ignore `heuristic`.
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth first graph search.")]
    Dfs,
    #[clap(help = "Breadth first graph search, finds plans with the fewest actions.")]
    Bfs,
    #[clap(help = "Uniform cost search, finds cheapest plans.")]
    Ucs,
    #[clap(
        name = "astar",
        help = "A* search, finds cheapest plans if the heuristic is admissible."
    )]
    #[strum(serialize = "astar")]
    AStar,
}

impl SearchEngineName {
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        match self {
            SearchEngineName::Dfs => DFS::new().search(problem, heuristic),
            SearchEngineName::Bfs => BFS::new().search(problem, heuristic),
            SearchEngineName::Ucs => UCS::new().search(problem, heuristic),
            SearchEngineName::AStar => AStar::new().search(problem, heuristic),
        }
    }

    pub fn uses_heuristic(&self) -> bool {
        matches!(self, SearchEngineName::AStar)
    }
}
