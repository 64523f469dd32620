//! Foundation module - Core utilities and types
//!
//! This module provides the utilities shared by the store, the systems and
//! the geometry kernel:
//! - Math types and angle conversions
//! - Logging setup

pub mod math;
pub mod logging;
