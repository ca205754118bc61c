//! Locations, great-circle distances and the scoring tiers built on them.

pub mod catalog;
pub mod consts;
pub mod distance;
pub mod error;
pub mod models;
pub mod scoring;
