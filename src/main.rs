use annokit::designer::ImageProvider;
use annokit::{init_logging, parse_script, AnnotatorState, Config, DrawingMode, ImageSource, SvgRenderer};
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "annokit")]
#[command(about = "Replay a recorded annotation session and export its shapes")]
#[command(version = annokit::VERSION)]
struct Args {
    /// JSON array of pointer events and mode switches
    script: PathBuf,

    /// Background image (a blank canvas is used when absent or unreadable)
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// Directory that receives the JSON export and SVG preview
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Configuration file (defaults to the per-user config path)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Drawing mode active before the first scripted step
    #[arg(short, long, default_value = "rectangle")]
    mode: DrawingMode,

    /// Also print the annotations to stdout
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default_path()
            .map(|path| Config::load_or_default(&path))
            .unwrap_or_default(),
    };
    config.validate().context("Invalid configuration")?;

    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let steps = parse_script(&text)
        .with_context(|| format!("Malformed script {}", args.script.display()))?;

    let image = ImageSource::open_or_blank(args.image.as_deref(), &config.canvas);
    let (width, height) = image.dimensions();
    let renderer = SvgRenderer::new(width, height, &config.canvas, config.handles.clone());

    let mut state = AnnotatorState::with_image(config, image, renderer);
    state.set_mode(args.mode);
    let changed = state.replay(steps);
    tracing::info!(
        "Replayed {} with {} changes, {} shapes",
        args.script.display(),
        changed,
        state.shapes().len()
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    let json_path = state.export_annotations(&args.out)?;
    let svg_path = json_path.with_extension("svg");
    fs::write(&svg_path, state.renderer().document())
        .with_context(|| format!("Failed to write preview {}", svg_path.display()))?;
    tracing::info!("Preview written to {}", svg_path.display());

    if args.print {
        println!("{}", serde_json::to_string_pretty(&state.annotations())?);
    }

    Ok(())
}
