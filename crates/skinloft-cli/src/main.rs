//! skinloft CLI - loft a JSON plane stack and export the skin.
//!
//! The input is the plane-management collaborator's snapshot: a JSON array
//! of `{ "height": h, "points": [[x, y], ...] }` objects. Output is either
//! Wavefront OBJ or the raw JSON face list.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skinloft::{build_from_planes, AlgorithmRegistry, BuildOptions, Face, SketchPlane};

mod obj;

#[derive(Parser)]
#[command(name = "skinloft")]
#[command(about = "Loft stacked sketch loops into a 3D skin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Loft a plane stack and export the faces
    Loft {
        /// Input JSON plane stack
        input: PathBuf,
        /// Output file (format determined by extension: .obj, .json)
        output: PathBuf,
        /// Loft algorithm to use
        #[arg(short, long)]
        algorithm: Option<String>,
    },
    /// Display information about a plane stack
    Info {
        /// Input JSON plane stack
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Loft {
            input,
            output,
            algorithm,
        } => loft_file(&input, &output, algorithm),
        Commands::Info { input } => show_info(&input),
    }
}

fn load_planes(path: &Path) -> Result<Vec<SketchPlane>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let planes: Vec<SketchPlane> =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    Ok(planes)
}

fn loft_file(input: &Path, output: &Path, algorithm: Option<String>) -> Result<()> {
    let planes = load_planes(input)?;
    let registry = AlgorithmRegistry::default();
    let options = BuildOptions {
        algorithm,
        ..Default::default()
    };
    let model = build_from_planes(&planes, &registry, &options)?;

    let ext = output.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_lowercase().as_str() {
        "obj" => {
            fs::write(output, obj::write_obj(&model))
                .with_context(|| format!("writing {}", output.display()))?;
        }
        "json" => {
            let faces: Vec<&Face> = model
                .segments()
                .iter()
                .flat_map(|s| s.faces.iter())
                .collect();
            let json = serde_json::to_string_pretty(&faces)?;
            fs::write(output, json)
                .with_context(|| format!("writing {}", output.display()))?;
        }
        _ => anyhow::bail!("unknown output format: {ext}"),
    }

    println!(
        "Lofted {} planes into {} segments ({} faces) -> {}",
        planes.len(),
        model.segments().len(),
        model.face_count(),
        output.display()
    );
    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let planes = load_planes(input)?;

    println!("Planes: {}", planes.len());
    for plane in &planes {
        println!(
            "  height {:>10.3}  vertices {}",
            plane.height,
            plane.points.len()
        );
    }

    let registry = AlgorithmRegistry::default();
    let model = build_from_planes(&planes, &registry, &BuildOptions::default())?;
    println!("Segments: {}", model.segments().len());
    println!("Faces: {}", model.face_count());
    println!("Roof height: {}", model.roof_height());
    Ok(())
}
