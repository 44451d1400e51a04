//! Shared test utilities for the aicommit workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`home`]: [`TestHome`], a throwaway home directory with helpers for the
//!   persisted config file

pub mod home;

pub use home::TestHome;
