//! Mixed-cell connectivity packing.
//!
//! Converts the filtered per-shape face tables into the four-array ingestion
//! contract of the unstructured-grid renderer: per-cell node counts, per-cell
//! shape-type codes, a single cumulative offset stream, and a flat buffer of
//! local node indices. The exact four-array shape is the renderer's required
//! input and must not be altered.

use surfgrid_core::Result;

use crate::model::{Face, NodeIndex, QuadFace, TriFace};

/// Renderer shape-type code for a triangle cell (vtkTriangle).
pub const CELL_TRIANGLE: u8 = 5;

/// Renderer shape-type code for a quadrilateral cell (vtkQuad).
pub const CELL_QUAD: u8 = 9;

/// The packed connectivity buffers over the filtered element set.
///
/// The three per-cell arrays are parallel; `cell_offsets` is cumulative and
/// continuous across the quad/triangle boundary, so
/// `cell_offsets[i] - cell_offsets[i - 1] == node_counts[i]` and
/// `cell_offsets[0] == node_counts[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedCells {
    /// Nodes per cell (4 for quads, 3 for triangles).
    pub node_counts: Vec<u32>,
    /// Shape-type code per cell ([`CELL_QUAD`] or [`CELL_TRIANGLE`]).
    pub cell_types: Vec<u8>,
    /// Cumulative node-index offset per cell.
    pub cell_offsets: Vec<u32>,
    /// Flat local node indices (0-based positions into the point buffer).
    pub node_indices: Vec<u32>,
}

impl PackedCells {
    /// Returns the number of cells.
    pub fn num_cells(&self) -> usize {
        self.node_counts.len()
    }

    fn with_capacity(num_cells: usize, num_indices: usize) -> Self {
        Self {
            node_counts: Vec::with_capacity(num_cells),
            cell_types: Vec::with_capacity(num_cells),
            cell_offsets: Vec::with_capacity(num_cells),
            node_indices: Vec::with_capacity(num_indices),
        }
    }
}

/// Packs one shape group, continuing the offset stream at `offset`.
///
/// Returns the offset after the group, for the next group to continue from.
fn pack_group<const N: usize>(
    index: &NodeIndex,
    faces: &[Face<N>],
    cell_type: u8,
    mut offset: u32,
    out: &mut PackedCells,
) -> Result<u32> {
    #[allow(clippy::cast_possible_truncation)]
    let node_count = N as u32;
    for face in faces {
        offset += node_count;
        out.node_counts.push(node_count);
        out.cell_types.push(cell_type);
        out.cell_offsets.push(offset);
        for id in face.nodes {
            out.node_indices.push(index.local(id)?);
        }
    }
    Ok(offset)
}

/// Packs the filtered faces into the renderer's four-array contract.
///
/// Every referenced node id is verified against the lookup before any
/// packing work begins; a missing id fails the whole pack with an error
/// naming the offending ids.
pub fn pack(index: &NodeIndex, quads: &[QuadFace], tris: &[TriFace]) -> Result<PackedCells> {
    index.validate_faces(quads, tris)?;

    // Size pass: both totals are known exactly, so the fill pass never
    // reallocates.
    let num_cells = quads.len() + tris.len();
    let num_indices = 4 * quads.len() + 3 * tris.len();
    let mut packed = PackedCells::with_capacity(num_cells, num_indices);

    let offset = pack_group(index, quads, CELL_QUAD, 0, &mut packed)?;
    pack_group(index, tris, CELL_TRIANGLE, offset, &mut packed)?;

    debug_assert_eq!(packed.node_counts.len(), num_cells);
    debug_assert_eq!(packed.cell_types.len(), num_cells);
    debug_assert_eq!(packed.cell_offsets.len(), num_cells);
    debug_assert_eq!(packed.node_indices.len(), num_indices);
    Ok(packed)
}
