mod astar;
mod bfs;
mod dfs;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use ucs::UCS;
