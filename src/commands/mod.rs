//! Command implementations

pub mod assist;
pub mod batch;
pub mod evaluate;
pub mod openers;
pub mod play;

pub use assist::run_assist;
pub use batch::{BatchConfig, BatchStatistics, run_batch};
pub use evaluate::evaluate_pair;
pub use openers::{OpenerPair, best_pair, sweep_openers};
pub use play::{PlayConfig, PlayResult, RoundStep, play_word};
