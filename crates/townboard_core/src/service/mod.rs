//! Asynchronous access facade consumed by the presentation layer.
//!
//! # Responsibility
//! - Present catalog operations behind an async boundary with simulated
//!   network latency.
//! - Keep UI layers decoupled from storage and seeding details.

pub mod board_service;
pub mod latency;
