//! `torch-search` — minimum-time schedules for the bridge-and-torch puzzle.
//!
//! # Layered search
//!
//! ```text
//! for layer in 0..2N-3:
//!   ① Collapse — group the frontier by (side of every person, lamp side)
//!                and keep the cheapest state per group.
//!   ② Expand   — lamp left:  every pair of waiting people crosses;
//!                lamp right: every waiting person walks back alone.
//!   ③ Observe  — SearchObserver::on_layer_end(layer, kept, next).
//! pick the cheapest state of the last frontier.
//! ```
//!
//! Rosters of one or two people are answered without searching.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on states, steps, solutions.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use torch_core::Roster;
//! use torch_search::Solver;
//!
//! let roster = Roster::from_args(&["me", "1", "assistant", "2", "janitor", "5", "prof", "10"])?;
//! let solution = Solver::new(&roster).solve()?;
//! print!("{}", solution.display(&roster));
//! ```

pub mod error;
pub mod format;
pub mod observer;
pub mod search;
pub mod solution;
pub mod state;
pub mod step;


pub use error::{SearchError, SearchResult};
pub use format::SolutionDisplay;
pub use observer::{NoopObserver, SearchObserver, TracingObserver};
pub use search::{collapse, crossing_count, solve_args, Solver};
pub use solution::Solution;
pub use state::{Configuration, State, Step};
pub use step::{successors, Successors};
