//! Result-field catalog assembly.
//!
//! One explicit builder realizes every field eagerly, in the fixed
//! presentation order the results browser expects: identity fields, the
//! normal bundle, the per-cell node count, then the imported fields from the
//! source file. The first declared title is reserved/implicit and skipped;
//! imported columns align to `titles[1..]`.

use surfgrid_core::{FieldBinding, FieldCatalog, FieldEntry, Result, SurfgridError};

use crate::geometry::CellGeometry;

/// Builds the ordered field catalog for one load.
///
/// `rows` is the filtered per-element result matrix, one row per surviving
/// element in the quads-then-tris order, columns aligned to `titles[1..]`.
/// Any length disagreement with the owning id array is fatal.
pub fn assemble_fields(
    node_ids: &[u32],
    element_ids: &[u32],
    regions: &[i32],
    geometry: &CellGeometry,
    node_counts: &[u32],
    titles: &[String],
    rows: &[Vec<f64>],
) -> Result<FieldCatalog> {
    let num_cols = titles.len().saturating_sub(1);

    let mut catalog = FieldCatalog::new();
    catalog.push(FieldEntry::identity(
        "NodeID",
        FieldBinding::Node,
        node_ids.iter().map(|&id| f64::from(id)).collect(),
    ));
    catalog.push(FieldEntry::identity(
        "ElementID",
        FieldBinding::Cell,
        element_ids.iter().map(|&id| f64::from(id)).collect(),
    ));
    catalog.push(FieldEntry::identity(
        "Region",
        FieldBinding::Cell,
        regions.iter().map(|&r| f64::from(r)).collect(),
    ));

    catalog.push(FieldEntry::derived_vector(
        "Normal",
        FieldBinding::Cell,
        geometry.normal.clone(),
        "%.1f",
    ));
    catalog.push(FieldEntry::derived(
        "NormalX",
        FieldBinding::Cell,
        geometry.normal.iter().map(|n| n.x).collect(),
        "%.3f",
    ));
    catalog.push(FieldEntry::derived(
        "NormalY",
        FieldBinding::Cell,
        geometry.normal.iter().map(|n| n.y).collect(),
        "%.3f",
    ));
    catalog.push(FieldEntry::derived(
        "NormalZ",
        FieldBinding::Cell,
        geometry.normal.iter().map(|n| n.z).collect(),
        "%.3f",
    ));

    catalog.push(FieldEntry::derived(
        "Nnodes",
        FieldBinding::Cell,
        node_counts.iter().map(|&n| f64::from(n)).collect(),
        "%.0f",
    ));

    // Imported fields in source-declared order, skipping the reserved first
    // title.
    for (col, title) in titles.iter().skip(1).enumerate() {
        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            let value = row.get(col).copied().ok_or_else(|| {
                SurfgridError::FieldLengthMismatch {
                    name: title.clone(),
                    expected: num_cols,
                    actual: row.len(),
                }
            })?;
            values.push(value);
        }
        catalog.push(FieldEntry::imported(title.clone(), values, "%.3f"));
    }

    catalog.validate(node_ids.len(), element_ids.len())?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use surfgrid_core::{FieldKind, FieldValues};

    fn sample_geometry(n: usize) -> CellGeometry {
        CellGeometry {
            area: vec![1.0; n],
            centroid: vec![DVec3::ZERO; n],
            normal: vec![DVec3::Z; n],
        }
    }

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    /// The catalog follows the fixed presentation order, imported last.
    #[test]
    fn test_presentation_order() {
        let catalog = assemble_fields(
            &[1, 2, 3],
            &[10, 11],
            &[7, 7],
            &sample_geometry(2),
            &[4, 3],
            &titles(&["Density", "Pressure", "Mach"]),
            &[vec![101.0, 0.5], vec![102.0, 0.6]],
        )
        .expect("assemble failed");

        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "NodeID", "ElementID", "Region", "Normal", "NormalX", "NormalY", "NormalZ",
                "Nnodes", "Pressure", "Mach"
            ]
        );
    }

    /// The first declared title is reserved and never becomes a field.
    #[test]
    fn test_first_title_skipped() {
        let catalog = assemble_fields(
            &[1, 2, 3],
            &[10],
            &[1],
            &sample_geometry(1),
            &[3],
            &titles(&["Density", "Pressure"]),
            &[vec![42.0]],
        )
        .expect("assemble failed");

        assert!(catalog.get("Density").is_none());
        let pressure = catalog.get("Pressure").expect("field not found");
        assert_eq!(pressure.kind, FieldKind::Imported);
        assert_eq!(pressure.binding, FieldBinding::Cell);
        assert_eq!(pressure.values, FieldValues::Scalar(vec![42.0]));
        assert_eq!(pressure.data_format.as_deref(), Some("%.3f"));
    }

    /// No imported fields at all is fine (titles empty or only the reserved one).
    #[test]
    fn test_no_imported_fields() {
        let catalog = assemble_fields(
            &[1, 2, 3],
            &[10],
            &[1],
            &sample_geometry(1),
            &[3],
            &[],
            &[],
        )
        .expect("assemble failed");

        // Identity + normal bundle + node count only.
        assert_eq!(catalog.len(), 8);
    }

    /// 10 element ids against a 9-row imported field is a length mismatch.
    #[test]
    fn test_imported_row_count_mismatch() {
        let element_ids: Vec<u32> = (1..=10).collect();
        let regions = vec![1; 10];
        let rows: Vec<Vec<f64>> = (0..9).map(|i| vec![f64::from(i)]).collect();

        let err = assemble_fields(
            &[1, 2, 3],
            &element_ids,
            &regions,
            &sample_geometry(10),
            &[3; 10],
            &titles(&["Density", "Pressure"]),
            &rows,
        )
        .unwrap_err();

        match err {
            SurfgridError::FieldLengthMismatch {
                name,
                expected,
                actual,
            } => {
                assert_eq!(name, "Pressure");
                assert_eq!(expected, 10);
                assert_eq!(actual, 9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// Region array shorter than the element ids is a length mismatch.
    #[test]
    fn test_region_length_mismatch() {
        let err = assemble_fields(
            &[1, 2, 3],
            &[10, 11],
            &[7],
            &sample_geometry(2),
            &[4, 3],
            &[],
            &[],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SurfgridError::FieldLengthMismatch { ref name, .. } if name == "Region"
        ));
    }

    /// A ragged result row is rejected with the column's title.
    #[test]
    fn test_ragged_row_rejected() {
        let err = assemble_fields(
            &[1, 2, 3],
            &[10, 11],
            &[1, 1],
            &sample_geometry(2),
            &[3, 3],
            &titles(&["Density", "Pressure", "Mach"]),
            &[vec![1.0, 2.0], vec![1.0]],
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SurfgridError::FieldLengthMismatch { ref name, .. } if name == "Mach"
        ));
    }

    /// Normal components split out of the vector bundle.
    #[test]
    fn test_normal_components() {
        let mut geometry = sample_geometry(2);
        geometry.normal = vec![DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 0.0, -1.0)];

        let catalog = assemble_fields(
            &[1, 2, 3],
            &[10, 11],
            &[1, 1],
            &geometry,
            &[4, 3],
            &[],
            &[],
        )
        .expect("assemble failed");

        let nx = catalog.get("NormalX").expect("field not found");
        let nz = catalog.get("NormalZ").expect("field not found");
        assert_eq!(nx.values, FieldValues::Scalar(vec![1.0, 0.0]));
        assert_eq!(nz.values, FieldValues::Scalar(vec![0.0, -1.0]));

        let bundle = catalog.get("Normal").expect("field not found");
        assert_eq!(bundle.data_format.as_deref(), Some("%.1f"));
        assert!(matches!(bundle.values, FieldValues::Vector(_)));
    }
}
