//! Demo showing basic surfgrid usage.
//!
//! Builds a small mixed quad/triangle patch in memory, runs the load
//! pipeline, and prints the packed connectivity and the field catalog.

use surfgrid::*;

fn main() -> Result<()> {
    env_logger::init();

    let model = SurfaceModel {
        node_id: vec![1, 2, 3, 4, 5, 6],
        xyz: vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
        ],
        quads: vec![QuadFace::new(1, 7, [1, 2, 5, 4])],
        tris: vec![
            TriFace::new(2, 7, [2, 3, 5]),
            TriFace::new(3, 4, [3, 6, 5]),
        ],
        titles: vec!["Density".to_string(), "Pressure".to_string()],
        results: vec![vec![101_325.0], vec![101_200.0], vec![101_400.0]],
    };

    let config = LoadConfig {
        regions: RegionSelection::default(),
        length_units: Some(UnitRescale::new("m", "in")),
        pressure_units: Some(UnitRescale::new("Pa", "psi")),
    };

    let mesh = load(model, &config)?;

    println!(
        "Loaded {} nodes, {} cells",
        mesh.num_nodes(),
        mesh.num_cells()
    );
    println!("node_counts:  {:?}", mesh.packed.node_counts);
    println!("cell_types:   {:?}", mesh.packed.cell_types);
    println!("cell_offsets: {:?}", mesh.packed.cell_offsets);
    println!("node_indices: {:?}", mesh.packed.node_indices);

    println!("Fields:");
    for entry in &mesh.fields {
        println!(
            "  {:<10} {:?} {:?} ({} values, format {:?})",
            entry.name,
            entry.binding,
            entry.kind,
            entry.values.len(),
            entry.data_format
        );
    }

    Ok(())
}
