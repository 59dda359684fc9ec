//! API route handlers

pub mod targets;
