//! # Folio Architecture
//!
//! Folio is a **UI-agnostic catalog browser** for a personal collection of course files,
//! books and source code. The library holds every rule: the datasets, the query pipeline,
//! the delayed reveal, search, preferences and navigation. The terminal client only
//! parses arguments and renders what the library returns.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, runs browse loop    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns Preferences and config   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Catalog (catalog/, data/)   │ │  Storage (store/)          │
//! │  - generic query pipeline    │ │  - KeyValueStore trait     │
//! │  - reveal timer per view     │ │  - FileStore, InMemoryStore│
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## One Pipeline, Three Catalogs
//!
//! Books, source code cards and course files are filtered, searched and sorted by the
//! same code. Each record type implements [`catalog::CatalogRecord`], a table of field
//! accessors and sort rules, and [`catalog::pipeline::run`] does the rest.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never exits the
//! process. Diagnostics go through `tracing`; the binary decides where they end up.
//! Preference storage failures are logged and absorbed, never returned.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: Query state, the pipeline, facets and the reveal timer
//! - [`data`]: The static datasets
//! - [`search`]: Search across the registry of every catalog
//! - [`prefs`]: Theme, accent color, animation level and the welcome flag
//! - [`store`]: Key/value storage abstraction and implementations
//! - [`welcome`], [`nav`], [`format`], [`icons`]: presentation state and helpers
//! - [`config`]: Client configuration
//! - [`logging`]: Subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing, templated rendering and the browse loop (binary only)

mod keyword;

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod icons;
pub mod logging;
pub mod model;
pub mod nav;
pub mod prefs;
pub mod search;
pub mod store;
pub mod welcome;
