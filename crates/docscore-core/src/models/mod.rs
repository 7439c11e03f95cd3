//! Data models for the scoring engine.

pub mod config;
pub mod document;
pub mod result;
