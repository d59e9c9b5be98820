pub mod common;
pub mod pathfinding;
pub mod enumeration;

pub use common::GraphView;
pub use pathfinding::{dijkstra, PathResult};
pub use enumeration::enumerate_paths;
