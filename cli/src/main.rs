use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tilegrid_common::AxialCoord;
use tilegrid_common::geom::{hex, layout};
use tilegrid_common::util::config::Config;
use tilegrid_common::util::logger;
use tilegrid_common::util::targets::{self, TargetStrategy};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "tilegrid.toml")]
    config: PathBuf,

    /// Print results as JSON instead of one item per line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rectangular grid cells in row-major order
    #[command(allow_negative_numbers = true)]
    Grid {
        #[arg(long)]
        cols: Option<i32>,
        #[arg(long)]
        rows: Option<i32>,
    },
    /// Ring neighbor counts, `1 + i / 2` for each ring index
    #[command(allow_negative_numbers = true)]
    Neighbors {
        #[arg(short, long)]
        n: Option<i32>,
    },
    /// Hex cells at an exact distance from the center
    #[command(allow_negative_numbers = true)]
    Ring {
        #[arg(long)]
        q: Option<i32>,
        #[arg(long)]
        r: Option<i32>,
        #[arg(long)]
        radius: Option<i32>,
    },
    /// Hex rings from 1 up to the radius
    #[command(allow_negative_numbers = true)]
    Spiral {
        #[arg(long)]
        q: Option<i32>,
        #[arg(long)]
        r: Option<i32>,
        #[arg(long)]
        radius: Option<i32>,
        #[arg(long)]
        with_center: bool,
    },
    /// Pixel centers of every hexagon in the disk, for pointy-top layout
    #[command(allow_negative_numbers = true)]
    Pixels {
        #[arg(long)]
        q: Option<i32>,
        #[arg(long)]
        r: Option<i32>,
        #[arg(long)]
        radius: Option<i32>,
        #[arg(long)]
        size: Option<f64>,
    },
    /// Random click targets written as `/tile/{q}/{r}` request paths
    #[command(allow_negative_numbers = true)]
    Targets {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        radius: Option<i32>,
        #[arg(long)]
        strategy: Option<TargetStrategy>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;

    match args.command {
        Commands::Grid { cols, rows } => {
            let cols = cols.unwrap_or(config.grid.cols);
            let rows = rows.unwrap_or(config.grid.rows);
            log::info!("Generating {}x{} grid...", cols, rows);
            let grid = layout::generate_grid(cols, rows)?;
            emit(args.json, &grid, |c| format!("{} {}", c.row, c.col))?;
        }
        Commands::Neighbors { n } => {
            let n = n.unwrap_or(config.hex.neighbor_rings);
            let counts = layout::neighbor_counts(n)?;
            emit(args.json, &counts, |c| c.to_string())?;
        }
        Commands::Ring { q, r, radius } => {
            let center = center_from(&config, q, r);
            let radius = radius.unwrap_or(config.hex.click_radius);
            log::info!("Generating ring of radius {} around {}...", radius, center);
            let ring = hex::generate_ring(center, radius)?;
            emit(args.json, &ring, |c| format!("{} {}", c.q, c.r))?;
        }
        Commands::Spiral {
            q,
            r,
            radius,
            with_center,
        } => {
            let center = center_from(&config, q, r);
            let radius = radius.unwrap_or(config.hex.click_radius);
            log::info!("Generating spiral of radius {} around {}...", radius, center);
            let spiral = hex::generate_spiral(center, radius, with_center)?;
            emit(args.json, &spiral, |c| format!("{} {}", c.q, c.r))?;
        }
        Commands::Pixels { q, r, radius, size } => {
            let center = center_from(&config, q, r);
            let radius = radius.unwrap_or(config.hex.click_radius);
            let size = size.unwrap_or(config.hex.tile_size);
            log::info!(
                "Laying out disk of radius {} around {} (Tile size: {})...",
                radius,
                center,
                size
            );
            let cells: Vec<PixelCell> = hex::generate_disk(center, radius)?
                .into_iter()
                .map(|coord| {
                    let (x, y) = hex::axial_to_pixel(coord, size);
                    PixelCell { coord, x, y }
                })
                .collect();
            emit(args.json, &cells, |c| {
                format!("{} {} {:.3} {:.3}", c.coord.q, c.coord.r, c.x, c.y)
            })?;
        }
        Commands::Targets {
            count,
            radius,
            strategy,
            seed,
            output,
        } => {
            let count = count.unwrap_or(config.targets.count);
            let radius = radius.unwrap_or(config.hex.click_radius);
            let strategy = strategy.unwrap_or(config.targets.strategy);
            let output = output.unwrap_or_else(|| config.targets.output.clone());

            let mut rng = match seed.or(config.targets.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            log::info!(
                "Generating {} click targets (Radius: {}, Strategy: {:?})...",
                count,
                radius,
                strategy
            );
            let coords =
                targets::generate_targets(config.hex.center(), radius, count, strategy, &mut rng)?;

            prepare_output_dir(&output)?;
            targets::write_targets(&output, &coords)?;

            if args.json {
                let summary = TargetsSummary {
                    output: &output,
                    count: coords.len(),
                    paths: coords.iter().map(|c| targets::tile_path(*c)).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct PixelCell {
    #[serde(flatten)]
    coord: AxialCoord,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct TargetsSummary<'a> {
    output: &'a str,
    count: usize,
    paths: Vec<String>,
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            path
        );
        return Ok(Config::default());
    }

    log::info!("Loading configuration from {:?}", path);
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
    toml::from_str(&config_str).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
}

fn center_from(config: &Config, q: Option<i32>, r: Option<i32>) -> AxialCoord {
    AxialCoord::new(
        q.unwrap_or(config.hex.center_q),
        r.unwrap_or(config.hex.center_r),
    )
}

fn emit<T: Serialize>(
    json: bool,
    items: &[T],
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(items)?);
    } else {
        for item in items {
            println!("{}", line(item));
        }
    }
    Ok(())
}

fn prepare_output_dir(path_str: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(path_str).parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            log::info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
