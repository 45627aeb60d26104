//! API server configuration.
//!
//! The server binary resolves its listen address from `--bind` or
//! `BIND_ADDR`, falling back to this default.

/// Default listen address (the port the original service used).
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
