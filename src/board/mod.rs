//! In-memory task board with ordered task views.
//!
//! The board keeps an append-only task store and two secondary indices over
//! it: every task ordered by description, and every started task ordered by
//! start time. Both indices grow by binary insertion as tasks are created or
//! first moved out of the initial stage. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Ordered indices in [`index`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod index;
pub mod ports;
pub mod services;
