use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use bitrifill::RenderSurface as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bitrifill", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one node at a fixed scale as a PNG.
    Frame(FrameArgs),
    /// Simulate taps on a headless view and write the frames as PNGs.
    Play(PlayArgs),
    /// Print the settle events produced by a number of taps, as JSON.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct ConfigArg {
    /// Effect constants JSON; missing fields take the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SizeArgs {
    #[arg(long, default_value_t = 720)]
    width: u32,

    #[arg(long, default_value_t = 1280)]
    height: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Node index (palette position).
    #[arg(long, default_value_t = 0)]
    node: usize,

    /// Sweep progress in [0, 1].
    #[arg(long)]
    scale: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    size: SizeArgs,

    #[command(flatten)]
    config: ConfigArg,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Number of taps.
    #[arg(long, default_value_t = 1)]
    taps: u32,

    /// Virtual time between taps, in milliseconds. Taps landing mid-sweep are ignored.
    #[arg(long, default_value_t = 5_000)]
    tap_gap_ms: u64,

    /// Output directory for `frame_XXXXX.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Keep every n-th rendered frame.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Stop after this many render passes.
    #[arg(long, default_value_t = 100_000)]
    max_frames: u64,

    #[command(flatten)]
    size: SizeArgs,

    #[command(flatten)]
    config: ConfigArg,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Number of taps.
    #[arg(long, default_value_t = 10)]
    taps: u32,

    #[command(flatten)]
    config: ConfigArg,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(arg: &ConfigArg) -> anyhow::Result<bitrifill::EffectConfig> {
    let Some(path) = &arg.config else {
        return Ok(bitrifill::EffectConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg: bitrifill::EffectConfig = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn write_png(path: &Path, frame: &bitrifill::FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    if args.node >= cfg.node_count() {
        anyhow::bail!(
            "node {} out of range (palette has {} colors)",
            args.node,
            cfg.node_count()
        );
    }
    if !(0.0..=1.0).contains(&args.scale) {
        anyhow::bail!("scale must be in [0, 1], got {}", args.scale);
    }

    let canvas = bitrifill::Canvas::new(args.size.width, args.size.height)?;
    let mut surface = bitrifill::CpuSurface::new(canvas)?;
    surface.clear(cfg.background);
    bitrifill::draw_bi_tri_fill_line(&mut surface, &cfg, args.node, args.scale);
    let frame = surface.finish();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let canvas = bitrifill::Canvas::new(args.size.width, args.size.height)?;
    let every = args.every.max(1);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut renderer = bitrifill::Renderer::new(cfg)?;
    let mut surface = bitrifill::CpuSurface::new(canvas)?;
    let mut view = bitrifill::HeadlessView::new();
    for i in 0..u64::from(args.taps) {
        view.tap_at(i * args.tap_gap_ms);
    }

    let mut written = 0u64;
    let rendered = view.run_until_idle(&mut renderer, &mut surface, args.max_frames, |stamp, s| {
        if stamp.index % every != 0 {
            return Ok(());
        }
        let path = args.out_dir.join(format!("frame_{:05}.png", stamp.index / every));
        write_png(&path, &s.finish()).map_err(bitrifill::BitrifillError::Other)?;
        written += 1;
        Ok(())
    })?;

    tracing::info!(rendered, written, end_ms = view.now_ms(), "playback finished");
    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let mut chain = bitrifill::NodeChain::new(&cfg)?;

    let mut settles = Vec::with_capacity(args.taps as usize);
    for _ in 0..args.taps {
        chain.start_updating();
        if let Some(settle) = chain.run_to_settle() {
            settles.push(settle);
        }
    }

    let out = serde_json::to_string_pretty(&settles).context("serialize settle trace")?;
    println!("{out}");
    Ok(())
}
