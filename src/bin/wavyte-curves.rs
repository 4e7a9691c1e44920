use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavyte_curves::{
    Fps, FrameSize, FrameSpan, PresetOpts, ResolveThreading, Timeline, TransitionPreset,
};

#[derive(Parser, Debug)]
#[command(name = "wavyte-curves", version)]
struct Cli {
    /// Log curve construction and resolution details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List transition presets.
    Presets,
    /// Build a preset transition and write its timeline JSON.
    Plan(PlanArgs),
    /// Resolve timeline frames and print one JSON line per frame.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Preset name (see `presets`).
    #[arg(long)]
    preset: String,

    /// Outgoing clip media.
    #[arg(long)]
    leading: String,

    /// Incoming clip media (defaults to `--leading`).
    #[arg(long)]
    trailing: Option<String>,

    /// Transition length in seconds (defaults to the preset's own).
    #[arg(long)]
    duration: Option<f64>,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Output timeline JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (1-based, inclusive).
    #[arg(long, default_value_t = 1)]
    from: u64,

    /// Last frame (inclusive); defaults to the timeline end.
    #[arg(long)]
    to: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Plan(args) => cmd_plan(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_logging(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn cmd_presets() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for preset in TransitionPreset::all() {
        writeln!(
            out,
            "{:<18} {:.2}s  {} clip(s)",
            preset.name(),
            preset.default_duration_secs(),
            preset.clip_count()
        )?;
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let preset: TransitionPreset = args.preset.parse()?;
    let opts = PresetOpts {
        leading_source: args.leading,
        trailing_source: args.trailing,
        duration_secs: args.duration,
        fps: Fps::whole(args.fps)?,
        size: FrameSize::new(args.width, args.height)?,
    };
    let timeline = preset
        .timeline(&opts)
        .with_context(|| format!("build preset '{preset}'"))?;
    timeline
        .to_path(&args.out)
        .with_context(|| format!("write timeline '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} clips, {} frames)",
        args.out.display(),
        timeline.clips.len(),
        timeline.duration_frames
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let timeline = Timeline::from_path(&args.in_path)
        .with_context(|| format!("load timeline '{}'", args.in_path.display()))?;
    let span = FrameSpan::new(args.from, args.to.unwrap_or(timeline.duration_frames))?;
    let threading = ResolveThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let frames = timeline.resolve_span(span, threading)?;

    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    for state in &frames {
        serde_json::to_writer(&mut out, state).context("encode frame state")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    eprintln!("sampled {} frames", frames.len());
    Ok(())
}
