//! # Core Chrome Logic
//!
//! This module contains the reconciliation and routing logic.
//! It knows nothing about any specific widget toolkit or web view.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Chrome (state)       │
//!                    │  • Action (calls)       │
//!                    │  • reconcile()          │
//!                    │  • route() (events)     │
//!                    │                         │
//!                    │  No painting. No I/O    │
//!                    │  beyond icon reads.     │
//!                    └───────────┬─────────────┘
//!                                │ RenderCommand
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Native    │      │  Replay    │      │   Tests    │
//!     │ action bar │      │  (stdout)  │      │ (recorder) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `Chrome`, the state of one chrome session
//! - [`action`]: `Action`, the top-level calls the web layer can make
//! - [`reconcile`]: applies a configuration message
//! - [`router`]: routes interaction events to callback identifiers

pub mod action;
pub mod config;
pub mod error;
pub mod item;
pub mod lenient;
pub mod message;
pub mod nav;
pub mod reconcile;
pub mod registry;
pub mod router;
pub mod state;
