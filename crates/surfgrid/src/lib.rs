//! Surface mesh to unstructured-grid conversion pipeline.
//!
//! surfgrid ingests a discretized surface mesh (nodes, mixed triangle and
//! quadrilateral faces, per-face region tags, and per-face result fields)
//! and converts it into renderer-ready indexed geometry plus an ordered
//! catalog of node- and cell-bound result fields:
//!
//! - [`filter`] drops faces by region tag (include wins over remove)
//! - [`geometry`] derives per-face area, centroid, and winding-order normal
//! - [`pack`] flattens both shape groups into the renderer's four-array
//!   mixed-cell connectivity contract
//! - [`assemble`] realizes the result-field catalog in presentation order
//! - [`pipeline::load`] runs the whole batch, all-or-nothing
//!
//! Parsing the on-disk mesh format is the job of an external reader; it
//! hands over a [`SurfaceModel`] and this crate does the rest.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod assemble;
pub mod filter;
pub mod geometry;
pub mod model;
pub mod pack;
pub mod pipeline;
pub mod units;

pub use assemble::assemble_fields;
pub use geometry::CellGeometry;
pub use model::{Face, NodeIndex, QuadFace, SurfaceModel, TriFace};
pub use pack::{PackedCells, CELL_QUAD, CELL_TRIANGLE};
pub use pipeline::{load, LoadedMesh};

// Re-export the core types callers need alongside the pipeline
pub use surfgrid_core::{
    FieldBinding, FieldCatalog, FieldEntry, FieldKind, FieldValues, LoadConfig, RegionMode,
    RegionSelection, Result, SurfgridError, UnitRescale,
};

// Re-export glam types for convenience
pub use glam::DVec3;
