use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use room_redesign::generator::prompt;
use room_redesign::render::export::{is_photo, load_photo, save_jpeg};
use room_redesign::render::redesign_or_keep_floor;
use room_redesign::render::textures::TextureDir;
use room_redesign::state::config::AppConfig;
use room_redesign::{AccentColor, FlooringTag, RedesignError, RedesignParams, RoomType, StyleTag, WallFinish};

/// Preview a room redesign from a photo
#[derive(Debug, Parser)]
#[command(name = "room-redesign", version, about)]
struct Cli {
    /// JSON config file (asset directory, export quality, output name)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with floor_wood.jpg, floor_marble.jpg, floor_tile.jpg and sample_room.jpg
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Redesign one photo
    Render {
        /// Room photo (jpg/png). Uses the sample room when omitted.
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Where to write the JPEG result
        #[arg(long, short)]
        output: Option<PathBuf>,

        #[command(flatten)]
        choices: Choices,
    },
    /// Redesign every photo in a folder (recursively)
    Batch {
        folder: PathBuf,

        /// Results are written here, one JPEG per photo
        #[arg(long)]
        out_dir: PathBuf,

        #[command(flatten)]
        choices: Choices,
    },
    /// Print the generation prompt for the chosen options
    Prompt {
        #[command(flatten)]
        choices: Choices,
    },
}

/// Design choices. Flags override values read from `--params`.
#[derive(Debug, Args)]
struct Choices {
    /// Saved parameters (JSON)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Modern, Minimalist, Traditional, Luxury, Industrial or Scandinavian
    #[arg(long)]
    style: Option<StyleTag>,

    /// Accent color as #rrggbb
    #[arg(long)]
    accent: Option<AccentColor>,

    /// Keep Original, Wood, Marble or Tile
    #[arg(long)]
    flooring: Option<FlooringTag>,

    /// Paint – Matte, Paint – Satin, Textured or Wallpaper
    #[arg(long)]
    wall_finish: Option<WallFinish>,

    /// Living Room, Bedroom, Kitchen or Bathroom
    #[arg(long)]
    room: Option<RoomType>,
}

impl Choices {
    fn resolve(&self) -> Result<RedesignParams, RedesignError> {
        let mut params = match &self.params {
            Some(path) => RedesignParams::from_json(&std::fs::read_to_string(path)?)?,
            None => RedesignParams::default(),
        };

        if let Some(style) = &self.style {
            params.style = style.clone();
        }
        if let Some(accent) = self.accent {
            params.accent = accent;
        }
        if let Some(flooring) = self.flooring {
            params.flooring = flooring;
        }
        if let Some(wall_finish) = self.wall_finish {
            params.wall_finish = wall_finish;
        }
        if let Some(room) = self.room {
            params.room = room;
        }
        Ok(params)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RedesignError> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(assets) = cli.assets {
        config.asset_dir = assets;
    }

    match cli.command {
        Command::Render { input, output, choices } => {
            let params = choices.resolve()?;
            let input = match input {
                Some(path) => path,
                None => {
                    tracing::info!("no photo given, using the sample room");
                    config.sample_photo()
                }
            };
            let output = output.unwrap_or_else(|| PathBuf::from(&config.output_name));
            render_one(&config, &params, &input, &output)
        }
        Command::Batch { folder, out_dir, choices } => {
            let params = choices.resolve()?;
            let summary = render_folder(&config, &params, &folder, &out_dir)?;
            tracing::info!(
                rendered = summary.rendered,
                failed = summary.failed,
                "batch complete"
            );
            Ok(())
        }
        Command::Prompt { choices } => {
            println!("{}", prompt(&choices.resolve()?));
            Ok(())
        }
    }
}

/// Render a single photo with the local pipeline
fn render_one(
    config: &AppConfig,
    params: &RedesignParams,
    input: &Path,
    output: &Path,
) -> Result<(), RedesignError> {
    let textures = TextureDir::new(&config.asset_dir);
    let photo = load_photo(input)?;
    let image = redesign_or_keep_floor(&photo, params, &textures)?;

    save_jpeg(output, &image, config.export_quality)
}

/// Result of a batch run
#[derive(Debug, Clone, Default)]
struct BatchSummary {
    rendered: usize,
    failed: usize,
}

/// Where a batch writes the result for a photo at `relative` inside the folder
///
/// The source extension stays in the name, so `room.jpg` and `room.png`
/// in the same folder become `room.jpg.jpg` and `room.png.jpg`.
fn batch_output_path(out_dir: &Path, relative: &Path) -> PathBuf {
    let mut name = relative.as_os_str().to_owned();
    name.push(".jpg");
    out_dir.join(name)
}

/// Render every photo under `folder` into `out_dir`
fn render_folder(
    config: &AppConfig,
    params: &RedesignParams,
    folder: &Path,
    out_dir: &Path,
) -> Result<BatchSummary, RedesignError> {
    let textures = TextureDir::new(&config.asset_dir);
    if textures.missing().contains(&params.flooring) {
        tracing::warn!(
            flooring = %params.flooring,
            "texture missing from {}, floors will be kept",
            textures.root().display()
        );
    }

    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_photo(path) {
            continue;
        }

        let relative = path.strip_prefix(folder).unwrap_or(path);
        let output = batch_output_path(out_dir, relative);

        let result = load_photo(path)
            .and_then(|photo| redesign_or_keep_floor(&photo, params, &textures))
            .and_then(|image| save_jpeg(&output, &image, config.export_quality));

        match result {
            Ok(()) => {
                summary.rendered += 1;
                if summary.rendered % 25 == 0 {
                    tracing::info!("rendered {} photos...", summary.rendered);
                }
            }
            Err(err) => {
                summary.failed += 1;
                tracing::warn!(path = %path.display(), error = %err, "skipping photo");
            }
        }
    }

    Ok(summary)
}
