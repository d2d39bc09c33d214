//! Adaptive trading signal engine
//!
//! Periodically fetches price history for a set of instruments, derives
//! technical indicators, fuses them into a BUY/SELL/HOLD signal, sizes and
//! executes confident trades, and tunes its own risk confidence from the
//! outcomes. State survives restarts through a JSON snapshot.

pub mod common;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod memory;
pub mod metrics;
pub mod models;
pub mod risk;
pub mod services;
pub mod signals;
