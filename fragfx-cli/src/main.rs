use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use fragfx::{ClipStyle, Dimensions, EffectOptions, FragmentsEffect, Point, translate3d_css};

#[derive(Parser, Debug)]
#[command(name = "fragfx", version)]
struct Cli {
    /// Log engine activity to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the per-fragment layout as JSON.
    Layout(LayoutArgs),
    /// Composite the fragments of an image into a PNG.
    Preview(PreviewArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClipArg {
    Polygon,
    Rect,
}

impl From<ClipArg> for ClipStyle {
    fn from(c: ClipArg) -> Self {
        match c {
            ClipArg::Polygon => ClipStyle::Polygon,
            ClipArg::Rect => ClipStyle::Rect,
        }
    }
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Effect options JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,

    /// Container height in pixels.
    #[arg(long)]
    height: f64,

    /// Seed for reproducible layouts; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Clip mechanism to emit.
    #[arg(long, value_enum, default_value_t = ClipArg::Polygon)]
    clip: ClipArg,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Source image.
    #[arg(long)]
    image: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Effect options JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width in pixels (image width when omitted).
    #[arg(long)]
    width: Option<f64>,

    /// Container height in pixels (image height when omitted).
    #[arg(long)]
    height: Option<f64>,

    /// Seed for reproducible layouts; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pointer position `X,Y` relative to the container, for parallax.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn load_options(path: Option<&PathBuf>) -> anyhow::Result<EffectOptions> {
    let Some(path) = path else {
        return Ok(EffectOptions::new());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    EffectOptions::from_json(&text).with_context(|| format!("parse config '{}'", path.display()))
}

fn build_effect(
    options: &EffectOptions,
    dims: Dimensions,
    background: &str,
    style: ClipStyle,
    seed: Option<u64>,
) -> anyhow::Result<FragmentsEffect> {
    let fx = match seed {
        Some(seed) => FragmentsEffect::with_seed(options, dims, background, style, seed)?,
        None => FragmentsEffect::from_entropy(options, dims, background, style)?,
    };
    Ok(fx)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_ref())?;
    let dims = Dimensions::new(args.width, args.height);
    let fx = build_effect(&options, dims, "", args.clip.into(), args.seed)?;

    let fragments = fx
        .fragments()
        .iter()
        .map(|f| {
            serde_json::json!({
                "index": f.index,
                "parallax": f.parallax,
                "area": f.layout.area,
                "clip": f.layout.clip,
                "clipCss": format!("{}: {}", f.layout.clip.css_property(), f.layout.clip.to_css()),
                "translation": f.layout.translation,
                "transformCss": translate3d_css(f.layout.translation),
            })
        })
        .collect::<Vec<_>>();
    let doc = serde_json::json!({
        "dimensions": fx.dimensions(),
        "fragments": fragments,
    });

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_ref())?;
    let source = fragfx::load_image(&args.image)?;
    let dims = Dimensions::new(
        args.width.unwrap_or(f64::from(source.width())),
        args.height.unwrap_or(f64::from(source.height())),
    );
    let background = args.image.to_string_lossy();
    let fx = build_effect(&options, dims, &background, ClipStyle::Rect, args.seed)?;

    let parallax = match args.pointer {
        Some(p) => fx.pointer_move(p),
        None => Vec::new(),
    };
    let frame = fragfx::render_preview(&source, fx.fragments(), dims, &parallax)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
