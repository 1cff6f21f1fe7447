//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the sandbox:
//! - Math types
//! - Color space and photometric conversions
//! - Logging utilities

pub mod math;
pub mod color;
pub mod logging;
