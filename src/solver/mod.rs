//! Expected-size-minimizing search
//!
//! The constraint model, candidate filtering, expectation scoring, and the
//! session state machine that ties them together.

mod constraint;
mod expectation;
mod filter;
mod selector;
mod session;

pub use constraint::ConstraintState;
pub use expectation::expected_remaining;
pub use filter::filter_candidates;
pub use selector::{score_table, select_best_guess};
pub use session::{GuesserSession, SessionConfig, SessionStatus, SolveError};
