//! Core abstractions for surfgrid.
//!
//! This crate provides the fundamental types used throughout surfgrid:
//! - [`SurfgridError`] and the crate-wide [`Result`] alias
//! - [`LoadConfig`] / [`RegionSelection`], the explicit per-load configuration
//! - [`FieldCatalog`] and friends, the result-field data model

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod field;

pub use config::{LoadConfig, RegionMode, RegionSelection, UnitRescale};
pub use error::{Result, SurfgridError};
pub use field::{FieldBinding, FieldCatalog, FieldEntry, FieldKind, FieldValues};

// Re-export glam types for convenience
pub use glam::DVec3;
