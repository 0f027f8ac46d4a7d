//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee record library**. The CLI that ships
//! with it is just one client; the same core could sit behind a web UI or a
//! TUI without changes.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, renders the table, colors messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the live RecordStore and the SelectionSet           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic returning Result<CmdResult>          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (records, query, selection, csv, store/)    │
//! │  - RecordStore owns the collection, persists every change   │
//! │  - query::view derives filter → sort → paginate on demand   │
//! │  - Persistence trait: FileStore (prod), InMemoryStore (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Data Pipeline
//!
//! `RecordStore` is the single source of truth, in insertion order.
//! [`query::view`] is a pure function deriving the rendered page from the
//! collection plus a filter term, sort spec, and page request. The
//! [`selection::SelectionSet`] stores record ids globally, so selections
//! survive page changes; it is pruned after every delete. [`csv`] converts
//! between the record shape and external CSV text for import/export.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout/stderr, and never assumes a
//! terminal. Confirmation prompts for destructive actions belong to the
//! client; `delete` is unconditional once called.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`records`]: the canonical employee collection
//! - [`query`]: filter/sort/paginate pipeline
//! - [`selection`]: bulk-selection state
//! - [`csv`]: CSV codec (import/export)
//! - [`session`]: current-user capability
//! - [`store`]: persistence abstraction and backends
//! - [`model`]: core data types
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod csv;
pub mod error;
pub mod model;
pub mod query;
pub mod records;
pub mod selection;
pub mod session;
pub mod store;
