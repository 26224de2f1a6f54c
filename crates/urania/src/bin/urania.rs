use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use urania::chart::HouseSystem;
use urania::source::EphemerisCommand;
use urania::tables::{aspects_table, houses_table, planets_table};
use urania::{load_chart_from_file, render_chart_spec, WheelConfig};

#[derive(Parser, Debug)]
#[command(name = "urania")]
#[command(author, version, about = "Astrological chart wheel layout")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a chart and write its shape list as JSON
    Render {
        /// Chart JSON produced by the ephemeris
        chart: PathBuf,

        /// Wheel config TOML
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, default_value = "800")]
        width: f32,

        #[arg(long, default_value = "800")]
        height: f32,

        /// Title stored in the spec metadata
        #[arg(long)]
        title: Option<String>,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print planet, house and aspect tables
    Tables {
        chart: PathBuf,
    },
    /// Run the ephemeris binary and save its chart JSON
    Compute {
        /// Path to the ephemeris binary
        #[arg(long)]
        bin: PathBuf,

        /// Local date, YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Local time, HH:MM
        #[arg(long)]
        time: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// House system code: P, R, E, W, T or M
        #[arg(long, default_value = "P")]
        hsys: String,

        /// IANA timezone id
        #[arg(long)]
        tzid: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.command {
        Command::Render {
            chart,
            config,
            width,
            height,
            title,
            output,
        } => {
            let wheel_config = match &config {
                Some(path) => WheelConfig::load_from_file(path)
                    .with_context(|| format!("Failed to load wheel config {}", path.display()))?,
                None => WheelConfig::default(),
            };
            let chart = load_chart_from_file(&chart)
                .with_context(|| format!("Failed to load chart {}", chart.display()))?;

            let mut spec = render_chart_spec(&chart, &wheel_config, width, height)?;
            spec.metadata.title = title;
            info!(
                "Rendered {} shapes ({} planets, {} aspects)",
                spec.shapes.len(),
                spec.metadata.planet_count,
                spec.metadata.aspect_count
            );
            write_output(output.as_deref(), &spec.to_json()?)?;
        }
        Command::Tables { chart } => {
            let chart = load_chart_from_file(&chart)
                .with_context(|| format!("Failed to load chart {}", chart.display()))?;

            println!("Planets");
            for row in planets_table(&chart) {
                println!("  {}", row);
            }
            println!("House cusps");
            for row in houses_table(&chart) {
                println!("  {}", row);
            }
            println!("Aspects");
            for row in aspects_table(&chart) {
                println!("  {}", row);
            }
        }
        Command::Compute {
            bin,
            date,
            time,
            lat,
            lon,
            hsys,
            tzid,
            output,
        } => {
            let house_system = HouseSystem::from_code(&hsys)
                .with_context(|| format!("Unknown house system code: {}", hsys))?;
            let command = EphemerisCommand {
                binary: bin,
                date,
                time,
                latitude: lat,
                longitude: lon,
                house_system,
                tzid,
            };
            let json = command.run_raw()?;
            // fail before writing anything the renderer would reject
            urania::load_chart_from_json(&json)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
