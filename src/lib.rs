//! reviews-carousel library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod api;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod event_loop;
pub mod input;
pub mod reviews;
pub mod terminal;
