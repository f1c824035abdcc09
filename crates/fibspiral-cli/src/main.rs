//! fibspiral CLI - generate Fibonacci spiral point sets from the command
//! line.
//!
//! Stands in for the CAD host that would normally collect the parameters
//! from a command panel and render the points as a sketch curve. The typical
//! host ranges (points 10-1000, scale 0.1-1000, turns 0.1-10, height 0-1000)
//! are advisory only; the generator applies its own validation.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fibspiral::{generate, SpiralParams, SpiralSequence};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fibspiral")]
#[command(about = "Fibonacci spiral point generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate spiral points and write them as JSON or CSV
    Generate {
        /// Number of points to generate (hosts typically offer 10-1000)
        #[arg(short = 'n', long)]
        points: usize,
        /// Target maximum planar extent, in model units (typically 0.1-1000)
        #[arg(short, long, default_value_t = 1.0)]
        scale: f64,
        /// Number of full revolutions swept (typically 0.1-10)
        #[arg(short, long, default_value_t = 1.0)]
        turns: f64,
        /// Total vertical rise; 0 keeps the spiral flat (typically 0-1000)
        #[arg(long, default_value_t = 0.0)]
        height: f64,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the built-in verification table
    Verify,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// JSON array of {x, y, z} records
    Json,
    /// Comma-separated x,y,z lines with a header row
    Csv,
}

/// One emitted point, in a host-neutral serializable form.
#[derive(Debug, Serialize)]
struct PointRecord {
    x: f64,
    y: f64,
    z: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            points,
            scale,
            turns,
            height,
            format,
            output,
        } => {
            let params = SpiralParams::new(points)
                .with_scale(scale)
                .with_turns(turns)
                .with_height(height);
            generate_points(&params, format, output.as_deref())?;
        }
        Commands::Verify => {
            if !fibspiral::verify::run() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn generate_points(
    params: &SpiralParams,
    format: Format,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let spiral = generate(params)?;
    let text = render(&spiral, format)?;

    match output {
        Some(path) => {
            fs::write(path, text)?;
            println!("Wrote {} points to {}", spiral.len(), path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn render(spiral: &SpiralSequence, format: Format) -> Result<String> {
    let records: Vec<PointRecord> = spiral
        .iter()
        .map(|p| PointRecord {
            x: p.x,
            y: p.y,
            z: p.z,
        })
        .collect();

    let text = match format {
        Format::Json => serde_json::to_string_pretty(&records)?,
        Format::Csv => to_csv(&records),
    };
    Ok(text)
}

fn to_csv(records: &[PointRecord]) -> String {
    let mut out = String::from("x,y,z\n");
    for r in records {
        out.push_str(&format!("{},{},{}\n", r.x, r.y, r.z));
    }
    out
}
