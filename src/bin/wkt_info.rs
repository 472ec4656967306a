//! wkt-info: parse WKT literals and describe the resulting geometries.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wkt_reader::{parse_wkt, Geometry};

#[derive(Parser)]
#[command(name = "wkt-info")]
#[command(about = "Parse WKT geometries and print a summary of each")]
#[command(version)]
struct Args {
    /// WKT literals to parse. Standard input is read as one literal when none are given.
    wkt: Vec<String>,

    /// Print each geometry as JSON instead of a summary line
    #[arg(long)]
    json: bool,

    /// Log parser activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let inputs = if args.wkt.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read standard input")?;
        vec![input]
    } else {
        args.wkt
    };

    for input in &inputs {
        let geometry =
            parse_wkt(input).with_context(|| format!("Failed to parse {:?}", input.trim()))?;
        if args.json {
            println!("{}", serde_json::to_string(&geometry)?);
        } else {
            println!("{}", summary(&geometry));
        }
    }
    Ok(())
}

fn summary(geometry: &Geometry) -> String {
    let mut line = format!("{} {}", geometry.geometry_type(), geometry.coord_type());
    match geometry {
        Geometry::Polygon(polygon) => {
            line.push_str(&format!(" rings={}", polygon.num_rings()));
        }
        Geometry::MultiLineString(multi) => {
            line.push_str(&format!(" lines={}", multi.num_line_strings()));
        }
        Geometry::MultiPolygon(multi) => {
            line.push_str(&format!(" polygons={}", multi.num_polygons()));
        }
        _ => {}
    }
    line.push_str(&format!(" points={}", geometry.num_points()));
    line
}
