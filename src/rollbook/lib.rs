//! # Rollbook Architecture
//!
//! Rollbook is a **student record library** with a console client on top. The
//! core keeps an ordered roster of students, keeps their averages and grades
//! consistent with their marks, and persists the roster to a plain text file.
//! The interactive menu is one client of that core, not the core itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Login, menu loop, prompts, table output, exit codes      │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Roster and the storage backend for a session    │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per menu action                               │
//! │  - Returns CmdResult (students, rows, messages)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (roster.rs) + Grade Policy (grading.rs)       │
//! │  - Ordered students, derived fields recomputed on change    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (store/, export.rs)                            │
//! │  - RosterStore trait: FileStore, InMemoryStore              │
//! │  - One-way CSV export                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Fields
//!
//! A [`model::Student`] can only be built from a [`model::StudentRecord`] and a
//! [`grading::GradePolicy`], and its marks can only change through the
//! [`roster::Roster`]. Average and grade are therefore never stale, and they
//! are never written to disk: loading recomputes them.
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Roster, grading, store**: unit tests next to the code.
//! 2. **Commands** (`commands/*.rs`): business logic against
//!    `RosterFixture` and [`store::memory::InMemoryStore`].
//! 3. **API** (`api.rs`): dispatch and load behavior.
//! 4. **CLI**: prompt parsing unit tests, plus whole sessions driven through
//!    stdin in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`roster`]: The ordered record store
//! - [`grading`]: Band tables mapping averages to letter grades
//! - [`model`]: Core data types (`StudentRecord`, `Student`, `Scores`)
//! - [`store`]: Storage abstraction, text format and implementations
//! - [`export`]: CSV export
//! - [`auth`]: Credential check run before a session
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Login, menu loop, prompts and printing for the binary (not part of the lib API)

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod grading;
pub mod model;
pub mod roster;
pub mod store;
