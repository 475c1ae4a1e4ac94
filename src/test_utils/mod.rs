//! Test utilities for integration testing.
//!
//! This module provides:
//! - In-memory implementations of the store and notifier ports
//! - Failing variants for exercising error paths
//! - A builder for an `AppState` wired to those fakes

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
