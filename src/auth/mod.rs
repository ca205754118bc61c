pub mod consts;
pub mod extractors;
pub mod handlers;
pub mod identity;
pub mod passcode;
pub mod requests;
pub mod responses;
pub mod services;
