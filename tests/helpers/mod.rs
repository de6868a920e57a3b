//! Test helpers module
//!
//! This module provides utilities and helpers for testing the bundle loader.
//! It includes a mock bundle server, temp-dir contexts and sample bundles.

#![allow(dead_code)]

pub mod bundle_server;
pub mod simple_test;
pub mod test_data;

pub use bundle_server::*;
pub use simple_test::*;
pub use test_data::*;
