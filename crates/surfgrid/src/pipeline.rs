//! Load orchestration.
//!
//! One synchronous, single-threaded pass: validate the node table, rescale
//! units, filter by region, derive face geometry, pack connectivity, and
//! assemble the field catalog. All derived arrays are staged locally and
//! only handed back as a complete [`LoadedMesh`] once every stage has
//! succeeded; on any error the caller's previously loaded state stays
//! untouched.

use glam::DVec3;
use log::{debug, info};
use surfgrid_core::{FieldCatalog, LoadConfig, Result, SurfgridError};

use crate::assemble;
use crate::filter;
use crate::geometry::{self, CellGeometry};
use crate::model::{NodeIndex, SurfaceModel};
use crate::pack::{self, PackedCells};
use crate::units;

/// Everything the renderer and results browser need for one loaded mesh.
///
/// Owned exclusively by the caller; a new load builds a fresh instance and
/// the previous one is discarded wholesale.
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    /// Point coordinate buffer for the renderer, in output length units.
    pub points: Vec<DVec3>,
    /// 1-based node ids, aligned with `points`.
    pub node_ids: Vec<u32>,
    /// Filtered element ids, quads first then triangles.
    pub element_ids: Vec<u32>,
    /// Region tags aligned with `element_ids`.
    pub regions: Vec<i32>,
    /// The renderer's four-array connectivity contract.
    pub packed: PackedCells,
    /// Per-cell area/centroid/normal in element order.
    pub geometry: CellGeometry,
    /// Ordered result-field catalog for the results browser.
    pub fields: FieldCatalog,
}

impl LoadedMesh {
    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.node_ids.len()
    }

    /// Returns the number of filtered cells.
    pub fn num_cells(&self) -> usize {
        self.element_ids.len()
    }
}

/// Runs the full load pipeline on a reader-produced model.
///
/// Fatal errors (`MalformedMesh`, `FieldLengthMismatch`, `Conversion`) abort
/// the load before anything is returned; there is no partial or degraded
/// result.
pub fn load(model: SurfaceModel, config: &LoadConfig) -> Result<LoadedMesh> {
    let SurfaceModel {
        node_id,
        mut xyz,
        quads,
        tris,
        titles,
        results,
    } = model;

    if xyz.len() != node_id.len() {
        return Err(SurfgridError::MalformedMesh(format!(
            "{} node coordinates for {} node ids",
            xyz.len(),
            node_id.len()
        )));
    }
    let index = NodeIndex::build(&node_id)?;
    index.validate_faces(&quads, &tris)?;

    let num_elements = quads.len() + tris.len();
    let num_cols = titles.len().saturating_sub(1);
    if num_cols > 0 && results.len() != num_elements {
        return Err(SurfgridError::FieldLengthMismatch {
            name: "results".to_string(),
            expected: num_elements,
            actual: results.len(),
        });
    }

    if let Some(rescale) = &config.length_units {
        units::convert_length(&mut xyz, &rescale.from, &rescale.to)?;
        debug!("rescaled coordinates {} -> {}", rescale.from, rescale.to);
    }

    // Stable filter over each shape group; the concatenated mask keeps the
    // imported result rows aligned with the surviving elements.
    let quad_keep = filter::keep_flags(&quads, &config.regions);
    let tri_keep = filter::keep_flags(&tris, &config.regions);
    let quads = filter::apply_mask(&quads, &quad_keep);
    let tris = filter::apply_mask(&tris, &tri_keep);
    let keep: Vec<bool> = quad_keep.into_iter().chain(tri_keep).collect();
    let mut rows = if num_cols > 0 {
        filter::apply_mask(&results, &keep)
    } else {
        Vec::new()
    };
    debug!(
        "region filter kept {} of {} elements",
        quads.len() + tris.len(),
        num_elements
    );

    if let Some(rescale) = &config.pressure_units {
        // The first imported column is the pressure-like field.
        let scale = units::pressure_scale(&rescale.from, &rescale.to)?;
        for row in &mut rows {
            if let Some(first) = row.first_mut() {
                *first *= scale;
            }
        }
        debug!("rescaled pressure column {} -> {}", rescale.from, rescale.to);
    }

    let geometry = geometry::derive(&xyz, &index, &quads, &tris)?;
    let packed = pack::pack(&index, &quads, &tris)?;

    let element_ids: Vec<u32> = quads
        .iter()
        .map(|f| f.element_id)
        .chain(tris.iter().map(|f| f.element_id))
        .collect();
    let regions: Vec<i32> = quads
        .iter()
        .map(|f| f.region)
        .chain(tris.iter().map(|f| f.region))
        .collect();

    let fields = assemble::assemble_fields(
        &node_id,
        &element_ids,
        &regions,
        &geometry,
        &packed.node_counts,
        &titles,
        &rows,
    )?;

    info!("nnodes={} nelements={}", node_id.len(), packed.num_cells());
    if !xyz.is_empty() {
        let mut min = DVec3::splat(f64::MAX);
        let mut max = DVec3::splat(f64::MIN);
        for &p in &xyz {
            min = min.min(p);
            max = max.max(p);
        }
        info!("xmin={} xmax={} dx={}", min.x, max.x, max.x - min.x);
        info!("ymin={} ymax={} dy={}", min.y, max.y, max.y - min.y);
        info!("zmin={} zmax={} dz={}", min.z, max.z, max.z - min.z);
    }

    Ok(LoadedMesh {
        points: xyz,
        node_ids: node_id,
        element_ids,
        regions,
        packed,
        geometry,
        fields,
    })
}
