//! # Core Application Logic
//!
//! Dataset model, queries and navigation state for Baseline Search.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (data)       │
//!                    │  • Query (search/date)  │
//!                    │  • App + Screen stack   │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Typed `web-features` entries and loading
//! - [`query`]: Search, pagination, recent window and year grouping
//! - [`screens`]: Per-screen state kept on the navigation stack
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Layered configuration
//! - [`i18n`]: English and Japanese strings

pub mod action;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod query;
pub mod screens;
pub mod state;
