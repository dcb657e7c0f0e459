//! rectnav: run path queries against a rectangular navigation mesh.
//!
//! Loads a mesh from JSON (or generates a random one), finds a path
//! between two points and prints the cell route and the waypoints.
//!
//! # Usage
//!
//! ```text
//! rectnav --mesh level.json --from 1,1 --to 19,9
//! rectnav --generate 16x12 --seed 7 --from 0.5,0.5 --to 15.5,11.5 --json
//! ```
//!
//! Logging goes through `env_logger`; `RUST_LOG` overrides `--verbose`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rectnav_core::{Mesh, MeshGen, MeshGenConfig, Point};
use rectnav_paths::{QueryConfig, Route, Strategy, find_path_with};

/// Find a path between two points on a rectangular navigation mesh.
#[derive(Parser)]
#[command(name = "rectnav", version)]
struct Cli {
    /// Mesh file in JSON: {"boxes": [cell, ...], "adj": [[cell, [cell, ...]], ...]},
    /// each cell written as [x_min, x_max, y_min, y_max].
    #[arg(long, conflicts_with = "generate", required_unless_present = "generate")]
    mesh: Option<PathBuf>,

    /// Generate a random strip mesh of COLSxROWS unit cells instead of loading one.
    #[arg(long, value_parser = parse_size)]
    generate: Option<(usize, usize)>,

    /// Seed for --generate.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Fraction of cells left out as holes by --generate (0.0-1.0).
    #[arg(long, value_parser = parse_fraction, default_value_t = MeshGenConfig::default().hole_pct)]
    holes: f64,

    /// Write the mesh (loaded or generated) to this file as JSON.
    #[arg(long)]
    save_mesh: Option<PathBuf>,

    /// Source point as X,Y.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: Point,

    /// Destination point as X,Y.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: Point,

    /// Cell search strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Bidirectional)]
    strategy: StrategyArg,

    /// Print the route as JSON instead of a human-readable listing.
    #[arg(long)]
    json: bool,

    /// Log query diagnostics at debug level.
    #[arg(short, long)]
    verbose: bool,
}

/// Cell search strategy selection.
#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Search from both ends until the fronts meet.
    Bidirectional,
    /// Single-front A*.
    Astar,
    /// Breadth-first, fewest portal crossings.
    Breadth,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Bidirectional => Strategy::Bidirectional,
            StrategyArg::Astar => Strategy::Astar,
            StrategyArg::Breadth => Strategy::Breadth,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot access {}: {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("invalid mesh JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected X,Y but got {0:?}")]
    BadPoint(String),

    #[error("expected COLSxROWS but got {0:?}")]
    BadSize(String),

    #[error("expected a fraction between 0 and 1 but got {0:?}")]
    BadFraction(String),
}

fn parse_point(s: &str) -> Result<Point, CliError> {
    let bad = || CliError::BadPoint(s.to_owned());
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse::<f64>().map_err(|_| bad())?;
    let y = y.trim().parse::<f64>().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

fn parse_size(s: &str) -> Result<(usize, usize), CliError> {
    let bad = || CliError::BadSize(s.to_owned());
    let (c, r) = s.split_once(['x', 'X']).ok_or_else(bad)?;
    let c = c.trim().parse::<usize>().map_err(|_| bad())?;
    let r = r.trim().parse::<usize>().map_err(|_| bad())?;
    if c == 0 || r == 0 {
        return Err(bad());
    }
    Ok((c, r))
}

fn parse_fraction(s: &str) -> Result<f64, CliError> {
    let bad = || CliError::BadFraction(s.to_owned());
    let v = s.trim().parse::<f64>().map_err(|_| bad())?;
    if !(0.0..=1.0).contains(&v) {
        return Err(bad());
    }
    Ok(v)
}

fn load_mesh(path: &Path) -> Result<Mesh, CliError> {
    let text = std::fs::read_to_string(path).map_err(|err| CliError::Io {
        path: path.to_owned(),
        err,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn save_mesh(path: &Path, mesh: &Mesh) -> Result<(), CliError> {
    let text = serde_json::to_string(mesh)?;
    std::fs::write(path, text).map_err(|err| CliError::Io {
        path: path.to_owned(),
        err,
    })
}

fn print_route(route: &Route) {
    println!("cells ({}):", route.cells.len());
    for c in &route.cells {
        println!("  {c}");
    }
    println!(
        "path ({} points, length {:.3}):",
        route.path.len(),
        route.length()
    );
    for p in &route.path {
        println!("  {p}");
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mesh = match &cli.mesh {
        Some(path) => load_mesh(path)?,
        None => {
            let defaults = MeshGenConfig::default();
            let (cols, rows) = cli.generate.unwrap_or((defaults.cols, defaults.rows));
            let cfg = MeshGenConfig {
                cols,
                rows,
                hole_pct: cli.holes,
                ..defaults
            };
            MeshGen::new(StdRng::seed_from_u64(cli.seed)).strips(&cfg)
        }
    };
    log::info!("mesh has {} cells", mesh.len());
    if mesh.is_empty() {
        log::warn!("mesh has no cells; every query will fail");
    }

    if let Some(path) = &cli.save_mesh {
        save_mesh(path, &mesh)?;
    }

    let cfg = QueryConfig {
        strategy: cli.strategy.into(),
    };
    let route = match find_path_with(cli.from, cli.to, &mesh, &cfg) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("no path: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_route(&route);
    }
    Ok(ExitCode::SUCCESS)
}
