//! Photoframe Fetch Library
//!
//! This module exposes the fetcher and its supporting modules for use in
//! integration tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod fetcher;
pub mod log;
pub mod offline;
pub mod paths;
