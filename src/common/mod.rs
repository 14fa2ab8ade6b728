//! Shared definitions used across the application modules.

pub mod constants;
