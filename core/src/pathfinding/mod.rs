pub mod frontier;
pub mod search;
pub mod utils;

// Re-export the public functions
pub use frontier::Frontier;
pub use search::{astar_find_path, best_first_search, dijkstra_find_path, find_path};
pub use utils::{FoundPath, SearchResult, path_cost, reconstruct_path};
