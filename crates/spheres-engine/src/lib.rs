//! Search and evaluation for spheres.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;
pub mod selector;

pub use config::{Algorithm, DEFAULT_DEPTH, SearchConfig, SideAssignment};
pub use error::ConfigError;
pub use eval::Heuristics;
pub use eval::material::material_score;
pub use eval::pst::{SPHERE_TABLE, ScoreTable, position_score};
pub use eval::score::{INFINITY, Score};
pub use search::Searcher;
pub use selector::{InvalidMoves, MoveSelector, get_ai_move};
