//! Changelog sections — label-driven classification of issues.
//!
//! A [`SectionRegistry`] holds an ordered list of [`Section`]s, each a title
//! plus a set of trigger labels. [`collate`] walks a list of issues and puts
//! each one in the first section (in declaration order) that shares a label
//! with it. Issues that match nothing are left out.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ config       │───▶│  Section     │───▶│  Collator   │◀─── issues
//! │ (optional)   │    │  Registry    │    │             │
//! └──────────────┘    └──────────────┘    └─────────────┘
//!                                               │
//!                                        ┌──────┴──────┐
//!                                        │  Collated   │
//!                                        │  (ordered   │
//!                                        │   groups)   │
//!                                        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use relnotes_core::Issue;
//! use relnotes_sections::{collate, Section, SectionRegistry};
//!
//! let registry = SectionRegistry::build(vec![
//!     Section::new("Features", ["enhancement"]),
//!     Section::new("Fixes", ["bug"]),
//! ]);
//! let issues = vec![
//!     Issue::new(1, "Crash on start").with_labels(["bug"]),
//!     Issue::new(2, "Dark mode").with_labels(["enhancement", "bug"]),
//! ];
//!
//! let collated = collate(&registry, &issues);
//! let titles: Vec<_> = collated.iter().map(|g| g.title()).collect();
//! assert_eq!(titles, ["Features", "Fixes"]);
//! ```

mod collate;
mod model;
mod registry;

pub use collate::{Collated, Group, collate};
pub use model::Section;
pub use registry::{DEFAULT_SECTIONS, SectionRegistry};
