//! Per-face geometry derivation.
//!
//! Computes area, centroid, and outward unit normal for each filtered face.
//! Normals follow the source winding order; there is no automatic outward
//! orientation fix. Degenerate faces propagate a zero area and a zero normal
//! unflagged, matching the behavior of the source converter.

use glam::DVec3;
use surfgrid_core::Result;

use crate::model::{NodeIndex, QuadFace, TriFace};

/// Derived per-cell geometry, stacked quads first then triangles to match
/// the element concatenation order used everywhere downstream.
#[derive(Debug, Clone, Default)]
pub struct CellGeometry {
    /// Face areas.
    pub area: Vec<f64>,
    /// Arithmetic-mean centroids (not area-weighted).
    pub centroid: Vec<DVec3>,
    /// Unit normals, or zero vectors for degenerate faces.
    pub normal: Vec<DVec3>,
}

impl CellGeometry {
    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.area.len()
    }

    /// Returns whether there are no cells.
    pub fn is_empty(&self) -> bool {
        self.area.is_empty()
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            area: Vec::with_capacity(n),
            centroid: Vec::with_capacity(n),
            normal: Vec::with_capacity(n),
        }
    }
}

fn position(xyz: &[DVec3], index: &NodeIndex, id: u32) -> Result<DVec3> {
    Ok(xyz[index.local(id)? as usize])
}

/// Unnormalized cross product of the two edges anchored at `a`.
///
/// Its magnitude is twice the triangle area and its direction is the
/// winding-order normal.
fn edge_cross(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (b - a).cross(c - a)
}

/// Derives area, centroid, and normal for the filtered faces.
///
/// Quads are split along the 0-2 diagonal into two triangles; the split is
/// the same for every quad so area sums and normal directions reproduce.
pub fn derive(
    xyz: &[DVec3],
    index: &NodeIndex,
    quads: &[QuadFace],
    tris: &[TriFace],
) -> Result<CellGeometry> {
    let mut geometry = CellGeometry::with_capacity(quads.len() + tris.len());

    for face in quads {
        let a = position(xyz, index, face.nodes[0])?;
        let b = position(xyz, index, face.nodes[1])?;
        let c = position(xyz, index, face.nodes[2])?;
        let d = position(xyz, index, face.nodes[3])?;

        let cross0 = edge_cross(a, b, c);
        let cross1 = edge_cross(a, c, d);
        geometry.area.push(0.5 * (cross0.length() + cross1.length()));
        geometry.centroid.push((a + b + c + d) / 4.0);
        geometry.normal.push((cross0 + cross1).normalize_or_zero());
    }

    for face in tris {
        let a = position(xyz, index, face.nodes[0])?;
        let b = position(xyz, index, face.nodes[1])?;
        let c = position(xyz, index, face.nodes[2])?;

        let cross = edge_cross(a, b, c);
        geometry.area.push(0.5 * cross.length());
        geometry.centroid.push((a + b + c) / 3.0);
        geometry.normal.push(cross.normalize_or_zero());
    }

    Ok(geometry)
}
