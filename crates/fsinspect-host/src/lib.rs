//! Host helpers for fsinspect.
//!
//! Thin, stateless wrappers around the terminal and the process table:
//!
//! - [`color`]: bold ANSI color formatting for terminal messages
//! - [`run_capture`]: run a program and capture its output as text
//! - [`ping`]: probe whether a host answers the system `ping` utility

pub mod color;
mod error;
mod exec;
mod ping;

pub use error::HostError;
pub use exec::run_capture;
pub use ping::{ping, ping_args, reply_indicates_reachable};
