//! # greenway-server
//!
//! Outer surfaces for the Greenway Landscaping website:
//!
//! - [`server`] - axum HTTP server rendering pages per request
//! - [`export`] - static export of every page to a directory
//! - [`cli`] - the `greenway` command line
//! - [`logging`] - tracing subscriber setup
//!
//! Configuration is resolved and validated before any of these run. An
//! invalid configuration stops the process before a socket is bound or a
//! file is written.

pub mod cli;
pub mod export;
pub mod logging;
pub mod server;
