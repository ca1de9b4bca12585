//! Decision provider implementations.

pub mod heuristic;
pub mod pass;
pub mod scripted;

pub use heuristic::HeuristicProvider;
pub use pass::PassProvider;
pub use scripted::ScriptedProvider;
