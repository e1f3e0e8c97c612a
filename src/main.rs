//! `cinelab`: command-line front end to the cinematography lab core.
//!
//! Classifies shots, tabulates dolly-zoom curves, generates shot prompts,
//! manages option presets and prints the JSON Schemas that drive a control
//! panel.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use cinelab::camera::dolly_zoom::DEFAULT_TARGET_DISTANCE;
use cinelab::camera::DollyZoom;
use cinelab::engine::{CineLab, LabCommand};
use cinelab::options::Options;
use cinelab::prompt::build_instruction;
use cinelab::scene::{CompositionGrid, SceneState};
use cinelab::shot::{classify, ShotLabel};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cinelab")]
#[command(about = "Virtual cinematography lab", long_about = None)]
struct Cli {
    /// TOML options preset
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a camera distance into a shot type
    Shot {
        /// Camera-to-subject distance in meters
        #[arg(short, long)]
        distance: f64,

        /// Show "中文 (English)" labels
        #[arg(long)]
        bilingual: bool,
    },

    /// Tabulate a dolly-zoom from a starting pose
    Dolly {
        /// Starting distance in meters
        #[arg(short, long, default_value_t = 6.0)]
        distance: f64,

        /// Starting vertical FOV in degrees
        #[arg(short, long, default_value_t = 45.0)]
        fov: f64,

        /// Target distance in meters
        #[arg(short, long, default_value_t = DEFAULT_TARGET_DISTANCE)]
        target: f64,

        /// Number of intervals to sample
        #[arg(long, default_value_t = 10)]
        steps: u32,
    },

    /// Describe a configured shot through the text model
    Prompt {
        /// Camera-to-subject distance in meters
        #[arg(short, long)]
        distance: Option<f64>,

        /// Camera height in meters
        #[arg(long)]
        height: Option<f64>,

        /// Vertical FOV in degrees
        #[arg(short, long)]
        fov: Option<f64>,

        /// Composition guide
        #[arg(short, long, value_enum)]
        grid: Option<GridArg>,

        /// Disable a light by id (repeatable)
        #[arg(long = "off")]
        disabled: Vec<String>,

        /// Print the instruction instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the lab presets in a directory
    Presets {
        /// Directory holding `*.toml` presets
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Write the active options out as a preset to edit
    Init {
        /// Destination TOML file
        path: PathBuf,
    },

    /// Print a JSON Schema
    Schema {
        /// Which schema
        #[arg(value_enum, default_value_t = SchemaArg::Options)]
        which: SchemaArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GridArg {
    None,
    Thirds,
    Center,
    Golden,
}

impl From<GridArg> for CompositionGrid {
    fn from(arg: GridArg) -> Self {
        match arg {
            GridArg::None => Self::None,
            GridArg::Thirds => Self::Thirds,
            GridArg::Center => Self::Center,
            GridArg::Golden => Self::GoldenSpiral,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaArg {
    /// Runtime options
    Options,
    /// Scene control surface
    Scene,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Shot {
            distance,
            bilingual,
        } => {
            let label = ShotLabel::for_distance(distance, bilingual);
            writeln!(out, "{} {}", label.text, label.color)?;
        }
        Commands::Dolly {
            distance,
            fov,
            target,
            steps,
        } => {
            let curve = DollyZoom::new(distance, fov, target);
            writeln!(out, "k = {:.5}", curve.constant())?;
            writeln!(out, "{:>8} {:>10} {:>10}  shot", "progress", "distance", "fov")?;
            let steps = steps.max(1);
            for i in 0..=steps {
                let p = f64::from(i) / f64::from(steps);
                let (d, f) = curve.sample(p);
                writeln!(out, "{p:>8.2} {d:>10.3} {f:>10.3}  {}", classify(d))?;
            }
        }
        Commands::Prompt {
            distance,
            height,
            fov,
            grid,
            disabled,
            dry_run,
        } => {
            let mut lab = CineLab::from_options(options);
            let mut commands = Vec::new();
            if let Some(distance) = distance {
                commands.push(LabCommand::SetCameraDistance { distance });
            }
            if let Some(height) = height {
                commands.push(LabCommand::SetCameraHeight { height });
            }
            if let Some(fov) = fov {
                commands.push(LabCommand::SetCameraFov { fov });
            }
            if let Some(grid) = grid {
                commands.push(LabCommand::SetGrid { grid: grid.into() });
            }
            commands.extend(disabled.into_iter().map(|id| {
                LabCommand::SetLightEnabled { id, enabled: false }
            }));
            for command in commands {
                lab.execute(command)?;
            }

            if dry_run {
                writeln!(out, "{}", build_instruction(lab.scene()))?;
                return Ok(());
            }

            lab.execute(LabCommand::GeneratePrompt)?;
            let _ = lab.wait_for_prompt();
            if let Some(text) = lab.prompt_text() {
                writeln!(out, "{text}")?;
            }
        }
        Commands::Presets { dir } => {
            for name in Options::list_presets(&dir)? {
                writeln!(out, "{name}")?;
            }
        }
        Commands::Init { path } => {
            options.save(&path)?;
            writeln!(out, "wrote {}", path.display())?;
        }
        Commands::Schema { which } => {
            let schema = match which {
                SchemaArg::Options => Options::json_schema(),
                SchemaArg::Scene => SceneState::control_schema(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
        }
    }
    Ok(())
}
