//! Subway line management server.
//!
//! Keeps stations and lines, and lets sections be registered along a
//! line's path while keeping its distances consistent.

pub mod config;
pub mod domain;
pub mod store;
pub mod web;
