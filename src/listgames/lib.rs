//! # listgames Architecture
//!
//! listgames manages a personal collection of video games: register, edit,
//! search, delete, and move the whole collection in and out as a JSON file.
//! It is a library first. The `listgames` binary is one UI shell over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Fills defaults from config (export name, remote link)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - store: GameStore owns the collection, persists, notifies │
//! │  - query: filter + stable sort for display                  │
//! │  - validate: strict input checks, lenient import coercion   │
//! │  - codec: JSON export / import                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns
//! `Result<CmdResult>`. It never prints and never exits the process. The one
//! exception is logging through `tracing`, which goes wherever the binary
//! points the subscriber.
//!
//! ## Mutations
//!
//! Every change to the collection goes through [`store::GameStore`]:
//! validate, mutate memory, write the full collection to the backend, notify
//! subscribers. A failed write keeps the in-memory change and surfaces as
//! [`error::ListGamesError::Persistence`] so the UI can say the change is not
//! durable.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage backends and the game store
//! - [`model`]: `Game`, `GameInput`, `Condition`
//! - [`query`]: Search and sort
//! - [`validate`]: Strict and lenient validation
//! - [`codec`]: Export and import
//! - [`settings`]: Theme and Google Sheets link
//! - [`remote`]: Remote sync seam
//! - [`config`]: `config.json`
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod remote;
pub mod settings;
pub mod store;
pub mod validate;
