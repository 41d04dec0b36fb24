//! Input surface-mesh model and the node-id lookup.
//!
//! A [`SurfaceModel`] is the in-memory product of an external mesh reader:
//! node ids and coordinates, the two face tables, and the imported result
//! matrix. It is created once per load and never mutated incrementally; a new
//! load replaces it wholesale.

use std::collections::HashMap;

use glam::DVec3;
use surfgrid_core::{Result, SurfgridError};

/// A planar face with `N` nodes (3 for triangles, 4 for quadrilaterals).
///
/// Node ids reference the owning model's node set and are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face<const N: usize> {
    /// Element id, unique across both face tables.
    pub element_id: u32,
    /// Region tag grouping faces by boundary/material origin.
    pub region: i32,
    /// Ordered node ids; the winding order is trusted from the source.
    pub nodes: [u32; N],
}

/// A triangular face.
pub type TriFace = Face<3>;

/// A quadrilateral face.
pub type QuadFace = Face<4>;

impl<const N: usize> Face<N> {
    /// Creates a face from its id, region tag, and node ids.
    pub fn new(element_id: u32, region: i32, nodes: [u32; N]) -> Self {
        Self {
            element_id,
            region,
            nodes,
        }
    }
}

/// The in-memory surface mesh handed over by the external reader.
///
/// Element ordering is quadrilaterals first, then triangles, each table in
/// its source order. The `results` rows align to that pre-filter ordering;
/// columns align to `titles[1..]` (the first declared title is reserved and
/// already surfaced by the identity fields).
#[derive(Debug, Clone, Default)]
pub struct SurfaceModel {
    /// 1-based node ids, unique across the set.
    pub node_id: Vec<u32>,
    /// Node coordinates, same length and order as `node_id`.
    pub xyz: Vec<DVec3>,
    /// Quadrilateral face table.
    pub quads: Vec<QuadFace>,
    /// Triangle face table.
    pub tris: Vec<TriFace>,
    /// Declared result-field titles from the source file.
    pub titles: Vec<String>,
    /// Per-element scalar results, one row per element, quads then tris.
    pub results: Vec<Vec<f64>>,
}

impl SurfaceModel {
    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.node_id.len()
    }

    /// Returns the number of elements across both face tables.
    pub fn num_elements(&self) -> usize {
        self.quads.len() + self.tris.len()
    }
}

/// Lookup from raw node id to local 0-based index, built once per node set.
#[derive(Debug, Clone)]
pub struct NodeIndex {
    map: HashMap<u32, u32>,
}

impl NodeIndex {
    /// Builds the lookup, rejecting duplicate node ids.
    pub fn build(node_ids: &[u32]) -> Result<Self> {
        let mut map = HashMap::with_capacity(node_ids.len());
        let mut duplicates = Vec::new();
        for (local, &id) in node_ids.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            if map.insert(id, local as u32).is_some() {
                duplicates.push(id);
            }
        }
        if duplicates.is_empty() {
            Ok(Self { map })
        } else {
            duplicates.sort_unstable();
            duplicates.dedup();
            Err(SurfgridError::MalformedMesh(format!(
                "duplicate node ids: {duplicates:?}"
            )))
        }
    }

    /// Returns the number of nodes in the lookup.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Translates a raw node id into its local index.
    pub fn local(&self, id: u32) -> Result<u32> {
        self.map.get(&id).copied().ok_or_else(|| {
            SurfgridError::MalformedMesh(format!("face references missing node id {id}"))
        })
    }

    /// Verifies that every node id referenced by the face tables exists.
    ///
    /// Collects all offending ids so the error names every missing node,
    /// not just the first one hit.
    pub fn validate_faces(&self, quads: &[QuadFace], tris: &[TriFace]) -> Result<()> {
        let mut missing: Vec<u32> = quads
            .iter()
            .flat_map(|f| f.nodes)
            .chain(tris.iter().flat_map(|f| f.nodes))
            .filter(|id| !self.map.contains_key(id))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort_unstable();
        missing.dedup();
        Err(SurfgridError::MalformedMesh(format!(
            "faces reference missing node ids: {missing:?}"
        )))
    }
}
