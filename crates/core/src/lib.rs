//! # relnotes Core
//!
//! Domain types, traits, and error definitions for the relnotes changelog
//! generator. This crate has **zero framework dependencies** — it defines the
//! domain model that the registry, configuration, and CLI crates build on.
//!
//! ## Design Philosophy
//!
//! Classification only ever needs an item's label names, so that capability
//! is a trait ([`Labelled`]) defined here. The GitHub-shaped [`Issue`]
//! payload implements it, and so can any other record a caller wants to sort
//! into changelog sections.

pub mod error;
pub mod issue;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use issue::{Issue, Label, Labelled, PullRequestRef, User};
