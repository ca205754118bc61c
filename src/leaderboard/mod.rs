//! Global and per-nationality standings.

pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod services;
#[cfg(test)]
mod tests;
