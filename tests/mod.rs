//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The tests of the command line front end are only ran when the `cli` feature is enabled, as the
//! binary is not built otherwise.
mod textbook;
#[cfg(feature = "cli")]
mod cli;
