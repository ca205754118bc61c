pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod services;
