use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use glimmer::{
    AmbientRenderer, Direction, Ease, Fps, FrameOutcome, RasterSurface, Reveal, RevealConfig,
    SurfaceSize,
};

#[derive(Parser, Debug)]
#[command(name = "glimmer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render frames of the ambient background to PNG files.
    Ambient(AmbientArgs),
    /// Print a reveal pose timeline as JSON lines.
    Reveal(RevealArgs),
}

#[derive(Parser, Debug)]
struct AmbientArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 1)]
    frames: u64,

    /// Noise seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RevealArgs {
    /// Delay before the transition starts, in seconds.
    #[arg(long, default_value_t = 0.0)]
    delay: f64,

    /// Offset direction of the hidden pose.
    #[arg(long, value_enum, default_value_t = DirectionChoice::Up)]
    direction: DirectionChoice,

    /// Hidden-pose offset magnitude.
    #[arg(long, default_value_t = 50.0)]
    distance: f64,

    /// Transition duration in seconds.
    #[arg(long, default_value_t = 0.8)]
    duration: f64,

    /// Sampling rate in frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl From<DirectionChoice> for Direction {
    fn from(c: DirectionChoice) -> Self {
        match c {
            DirectionChoice::Up => Direction::Up,
            DirectionChoice::Down => Direction::Down,
            DirectionChoice::Left => Direction::Left,
            DirectionChoice::Right => Direction::Right,
            DirectionChoice::None => Direction::None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Ambient(args) => cmd_ambient(args),
        Command::Reveal(args) => cmd_reveal(args),
    }
}

fn cmd_ambient(args: AmbientArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut renderer = AmbientRenderer::with_seed(args.seed);
    renderer.start();
    let mut surface = RasterSurface::new(SurfaceSize::new(args.width, args.height));

    for i in 0..args.frames {
        let outcome = renderer.render_frame(Some(&mut surface));
        anyhow::ensure!(
            outcome == FrameOutcome::Painted,
            "frame {i} was not painted ({outcome:?})"
        );

        let out = args.out_dir.join(format!("frame_{i:04}.png"));
        surface
            .write_png(&out)
            .with_context(|| format!("write png '{}'", out.display()))?;
    }

    eprintln!("wrote {} frame(s) to {}", args.frames, args.out_dir.display());
    Ok(())
}

fn cmd_reveal(args: RevealArgs) -> anyhow::Result<()> {
    let fps = Fps::new(args.fps, 1)?;
    let config = RevealConfig {
        delay_secs: args.delay,
        direction: args.direction.into(),
        distance: args.distance,
        duration_secs: args.duration,
        ease: Ease::default(),
        ..RevealConfig::default()
    };

    let mut reveal = Reveal::new(config);
    reveal.observe(1.0, 0.0);

    let total_secs = config.sanitized().delay_secs + config.sanitized().duration_secs;
    let frames = (total_secs * fps.as_f64()).ceil() as u64 + 1;
    for frame in 0..=frames {
        let secs = fps.frames_to_secs(frame);
        let pose = reveal.pose_at(secs);
        let line = serde_json::json!({
            "frame": frame,
            "secs": secs,
            "opacity": pose.opacity,
            "offset": { "x": pose.offset.x, "y": pose.offset.y },
        });
        println!("{line}");
    }
    Ok(())
}
