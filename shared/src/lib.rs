//! Types crossing the engine ↔ scene boundary.
//!
//! The simulation engine and any presentation layer built on top of it share
//! only what lives here: configuration and the message contract.

pub mod config;
pub mod protocol;
