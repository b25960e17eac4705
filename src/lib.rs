//! sockprobe - a smoke test for Unix domain socket creation
//!
//! This crate provides:
//! - The socket probe (bind a stream socket at a path, release it, clean up)
//! - Reporting of probe results as text or JSON
//! - Configuration management
//!
//! # Cleanup
//!
//! Removal of the socket path before and after the bind is best-effort:
//! failures are ignored rather than reported, so a path the process cannot
//! unlink may outlive the probe.

pub mod config;
pub mod probe;
pub mod report;
