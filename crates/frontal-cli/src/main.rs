//! frontal CLI - projected silhouette area estimation for STL meshes.
//!
//! Renders a mesh orthographically along a cartesian axis and reports the
//! silhouette area estimated from covered pixels.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use frontal_area::{estimate_from_buffer, render_axis_view, Axis, Projection, DEFAULT_SCALE};
use frontal_mesh::{stl, TriangleMesh};
use frontal_raster::Framebuffer;

#[derive(Parser)]
#[command(name = "frontal")]
#[command(about = "Estimate the projected silhouette area of an STL mesh", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate projected area along one axis (or all three)
    Area {
        /// Input STL file (binary or ASCII)
        file: PathBuf,
        /// Projection axis: x, y, z, or all
        #[arg(short, long, default_value = "x")]
        axis: String,
        /// Supersampling factor; higher is slower but more precise
        #[arg(short, long, default_value_t = DEFAULT_SCALE)]
        scale: u32,
        /// Print pixel counts and resolution alongside the area
        #[arg(short, long)]
        verbose: bool,
        /// Emit results as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Write the rendered silhouette(s) as PNG to this path
        #[arg(long, value_name = "PATH")]
        dump_image: Option<PathBuf>,
    },
    /// Write the canonical sample shapes as binary STL files
    Fixtures {
        /// Output directory (created if missing)
        dir: PathBuf,
    },
    /// Display information about an STL file
    Info {
        /// Path to the STL file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Area {
            file,
            axis,
            scale,
            verbose,
            json,
            dump_image,
        } => run_area(&file, &axis, scale, verbose, json, dump_image.as_deref()),
        Commands::Fixtures { dir } => write_fixtures(&dir),
        Commands::Info { file } => show_info(&file),
    }
}

/// One axis worth of results, in JSON output order.
#[derive(Serialize)]
struct AxisReport {
    axis: Axis,
    #[serde(flatten)]
    projection: Projection,
}

fn run_area(
    file: &Path,
    axis: &str,
    scale: u32,
    verbose: bool,
    json: bool,
    dump_image: Option<&Path>,
) -> Result<()> {
    let mesh = stl::read_stl(file)
        .with_context(|| format!("failed to load mesh from {}", file.display()))?;

    let axes: Vec<Axis> = if axis.eq_ignore_ascii_case("all") {
        Axis::ALL.to_vec()
    } else {
        vec![axis.parse()?]
    };

    // Each estimation owns its render context, so a multi-axis run can fan
    // out across threads.
    let results: Vec<(Axis, Framebuffer, Projection)> = axes
        .par_iter()
        .map(|&axis| {
            let (fb, camera) = render_axis_view(&mesh, axis, scale)?;
            let projection = estimate_from_buffer(&fb, &camera);
            Ok((axis, fb, projection))
        })
        .collect::<frontal_area::Result<_>>()?;

    if let Some(base) = dump_image {
        for (axis, fb, _) in &results {
            let path = if results.len() == 1 {
                base.to_path_buf()
            } else {
                path_with_axis(base, *axis)
            };
            save_png(fb, &path)
                .with_context(|| format!("failed to write image {}", path.display()))?;
        }
    }

    if json {
        let reports: Vec<AxisReport> = results
            .into_iter()
            .map(|(axis, _, projection)| AxisReport { axis, projection })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (axis, _, p) in &results {
        if verbose {
            println!("- file: {}", file.display());
            println!("- axis: {}", axis);
            println!("- image dimensions: {} x {}", p.width, p.height);
            println!("- total pixels: {}", p.total_pixels);
            println!("- projected pixels: {}", p.covered_pixels);
            println!("- resolution: {:.5e}", p.resolution);
            println!("- area: {:.5e}", p.area);
            println!();
        } else {
            println!("axis {}: area = {:.6} units^2", axis, p.area);
        }
    }

    Ok(())
}

/// `silhouette.png` -> `silhouette-x.png` for multi-axis dumps.
fn path_with_axis(base: &Path, axis: Axis) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("silhouette");
    let ext = base.extension().and_then(|e| e.to_str()).unwrap_or("png");
    base.with_file_name(format!("{}-{}.{}", stem, axis, ext))
}

fn save_png(fb: &Framebuffer, path: &Path) -> Result<()> {
    let img = image::RgbaImage::from_raw(fb.width(), fb.height(), fb.pixels().to_vec())
        .context("framebuffer size mismatch")?;
    img.save(path)?;
    Ok(())
}

fn write_fixtures(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let shapes: [(&str, TriangleMesh); 5] = [
        ("cube.stl", frontal_fixtures::cube(1.0, 1.0, 1.0)),
        ("sphere.stl", frontal_fixtures::sphere(1.0, 100)),
        ("cone.stl", frontal_fixtures::cone(1.0, 2.0, 200)),
        ("disk.stl", frontal_fixtures::disk(0.5, 1.0, 200)),
        ("torus.stl", frontal_fixtures::torus(1.0, 0.5, 200)),
    ];

    for (name, mesh) in &shapes {
        let path = dir.join(name);
        stl::write_stl(&path, mesh)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote {} ({} triangles)", path.display(), mesh.num_triangles());
    }

    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let mesh = stl::read_stl(file)
        .with_context(|| format!("failed to load mesh from {}", file.display()))?;

    println!("STL mesh: {}", file.display());
    println!("  Triangles: {}", mesh.num_triangles());
    println!("  Vertices: {}", mesh.num_vertices());

    if let Some(bounds) = mesh.bounds() {
        let e = bounds.extents();
        let c = bounds.center();
        println!(
            "  Bounds: [{:.4}, {:.4}, {:.4}] to [{:.4}, {:.4}, {:.4}]",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
        println!("  Extents: {:.4} x {:.4} x {:.4}", e.x, e.y, e.z);
        println!("  Centroid: ({:.4}, {:.4}, {:.4})", c.x, c.y, c.z);
    }

    Ok(())
}
