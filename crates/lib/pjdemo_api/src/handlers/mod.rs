//! Request handlers.

pub mod generation;
pub mod openapi;
pub mod stubs;
pub mod users;
