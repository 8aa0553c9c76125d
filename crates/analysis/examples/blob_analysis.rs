//! Example: Segment-and-measure workflow
//!
//! This example demonstrates the region pipeline end to end:
//! 1. Rasterize a synthetic binary scene (a disk, a block, a thin curve)
//! 2. Label its connected components
//! 3. Measure shape descriptors and pairwise relations
//! 4. Inspect the curve's topology (endpoints, straightness, direction)

use regionkit_analysis::{label_regions, shape_descriptors, DescriptorParams};
use regionkit_core::{Connectivity, Raster};

fn main() {
    let scene = create_scene(28, 36);
    println!("Scene: {} x {}", scene.rows(), scene.cols());

    let regions = label_regions(&scene, Connectivity::Eight);
    println!("Components found: {}\n", regions.len());

    for (i, region) in regions.iter().enumerate() {
        let d = shape_descriptors(region, &DescriptorParams::default());
        println!(
            "Region {}: area={:4}  extent={}x{}  perimeter_length={:3}  circularity={:.3}  rectangularity={:.3}",
            i, d.area, d.width, d.height, d.perimeter_length, d.circularity, d.rectangularity
        );
    }

    println!();
    for i in 0..regions.len() {
        for j in i + 1..regions.len() {
            println!(
                "Region {} <-> {}: gap={:.2}  center distance={:.2}  neighboring={}",
                i,
                j,
                regions[i].distance_from_region(&regions[j]),
                regions[i].distance_of_centers(&regions[j]),
                regions[i].is_neighboring(&regions[j])
            );
        }
    }

    // The thin curve is the component with exactly two endpoints
    if let Some(curve) = regions
        .iter()
        .find(|r| r.end_point_coordinates().len() == 2)
    {
        let ends = curve.end_point_coordinates();
        println!("\nCurve endpoints: {:?}", ends);
        println!("Connective: {}", curve.is_connective(&ends));
        println!("Row/col correlation: {:.3}", curve.correlation());
        let (row, col) = ends[0];
        let (dr, dc) = curve.drdc_near_end_point(row, col, 5.0);
        println!("Direction at {:?}: ({:.2}, {:.2})", ends[0], dr, dc);
    }

    println!("\nDone.");
}

/// Binary scene with a filled disk, a filled block, and a one-pixel curve
fn create_scene(rows: usize, cols: usize) -> Raster<u8> {
    let mut scene: Raster<u8> = Raster::new(rows, cols);

    // Disk at (9, 9), radius 6
    for row in 0..rows {
        for col in 0..cols {
            let dr = row as i64 - 9;
            let dc = col as i64 - 9;
            if dr * dr + dc * dc <= 36 {
                scene.set(row, col, 1).unwrap();
            }
        }
    }

    // Block, 6 rows by 10 columns
    for row in 18..24 {
        for col in 4..14 {
            scene.set(row, col, 1).unwrap();
        }
    }

    // Curve: diagonal run into a vertical tail
    for i in 0..10 {
        scene.set(3 + i, 20 + i, 1).unwrap();
    }
    for row in 13..=20 {
        scene.set(row, 29, 1).unwrap();
    }

    scene
}
