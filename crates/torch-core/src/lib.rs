//! `torch-core` — foundational types for the bridge-and-torch solver.
//!
//! This crate is a dependency of every other `torch-*` crate.  It has no
//! `torch-*` dependencies and minimal external ones (`thiserror` and
//! `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`person`]      | `PersonId`, `Person`, `Roster` (canonical order)      |
//! | [`side`]        | `Side` enum (bank of the river)                       |
//! | [`time`]        | `CrossTime`                                           |
//! | [`config`]      | `SearchConfig`, `TieBreak`                            |
//! | [`error`]       | `TorchError`, `TorchResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod person;
pub mod side;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SearchConfig, TieBreak};
pub use error::{TorchError, TorchResult};
pub use person::{MAX_PEOPLE, Person, PersonId, Roster};
pub use side::Side;
pub use time::CrossTime;
