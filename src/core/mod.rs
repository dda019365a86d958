//! Core library components.
//!
//! The credential-helper protocol, store path mapping, verb handlers and
//! the secret store backends they drive.

pub mod config;
pub mod constants;
pub mod domain;
pub mod git;
pub mod helper;
pub mod protocol;
pub mod signal;
pub mod store;
