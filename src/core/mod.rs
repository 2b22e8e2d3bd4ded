//! # Core Application Logic
//!
//! This module contains the trainer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • catalog   (kana)     │
//!                    │  • history   (log)      │
//!                    │  • scoring   (signals)  │
//!                    │  • selector  (next)     │
//!                    │  • update()  (reducer)  │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  --stats   │
//!             │  Adapter   │          │  report    │
//!             │ (ratatui)  │          │  (main)    │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The kana table and lookups
//! - [`exercise`]: Drill and lookup directions
//! - [`history`]: The append-only practice log and its JSON file
//! - [`scoring`]: Frequently-wrong, needs-review and priority signals
//! - [`selector`]: Weighted choice of the next item
//! - [`options`]: Multiple-choice option sets
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app

pub mod action;
pub mod catalog;
pub mod config;
pub mod error;
pub mod exercise;
pub mod history;
pub mod options;
pub mod scoring;
pub mod selector;
pub mod state;
