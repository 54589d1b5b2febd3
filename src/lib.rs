//! Tablepoint - Restaurant membership tiers
//!
//! Tracks each customer's cumulative spend, resolves it against a tier table
//! (bronze through diamond by default) and keeps the stored tier in sync.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
