use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pointmorph::RenderSurface as _;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

#[derive(Parser, Debug)]
#[command(name = "pointmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one shape's point cloud and write it as JSON.
    Shape(ShapeArgs),
    /// Render a single morph frame as a PNG (software point sprites).
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Shape to generate.
    #[arg(long, value_enum)]
    kind: ShapeChoice,

    /// Number of points.
    #[arg(long, default_value_t = 2500)]
    count: usize,

    /// RNG seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Nominal object radius.
    #[arg(long, default_value_t = 1.0)]
    radius: f32,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Morph variant to mount.
    #[arg(long, value_enum, default_value_t = VariantChoice::Hero)]
    variant: VariantChoice,

    /// Scroll progress in [0, 1] (out-of-range values clamp).
    #[arg(long)]
    progress: f32,

    /// Device class (selects the particle budget).
    #[arg(long, value_enum, default_value_t = DeviceChoice::Desktop)]
    device: DeviceChoice,

    /// Output width in physical pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Output height in physical pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Device pixel ratio for sprite sizing.
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Elapsed-clock value handed to the surface shimmer.
    #[arg(long, default_value_t = 0.0)]
    time: f32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Orb,
    HardHat,
    Hammer,
    NeuralNet,
    Microphone,
    ShatteredOrb,
    Network,
    Gear,
    Shield,
}

impl ShapeChoice {
    fn kind(self) -> pointmorph::ShapeKind {
        match self {
            Self::Orb => pointmorph::ShapeKind::Orb,
            Self::HardHat => pointmorph::ShapeKind::HardHat,
            Self::Hammer => pointmorph::ShapeKind::Hammer,
            Self::NeuralNet => pointmorph::ShapeKind::NeuralNet,
            Self::Microphone => pointmorph::ShapeKind::Microphone,
            Self::ShatteredOrb => pointmorph::ShapeKind::ShatteredOrb,
            Self::Network => pointmorph::ShapeKind::Network,
            Self::Gear => pointmorph::ShapeKind::Gear,
            Self::Shield => pointmorph::ShapeKind::Shield,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantChoice {
    Hero,
    PainPoints,
}

impl VariantChoice {
    fn variant(self) -> pointmorph::MorphVariant {
        match self {
            Self::Hero => pointmorph::MorphVariant::hero(),
            Self::PainPoints => pointmorph::MorphVariant::pain_points(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DeviceChoice {
    Desktop,
    Mobile,
}

impl DeviceChoice {
    fn class(self) -> pointmorph::DeviceClass {
        match self {
            Self::Desktop => pointmorph::DeviceClass::Desktop,
            Self::Mobile => pointmorph::DeviceClass::Mobile,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Shape(args) => cmd_shape(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

#[derive(serde::Serialize)]
struct CloudDump<'a> {
    kind: &'a str,
    count: usize,
    points: &'a pointmorph::PointCloud,
}

fn ensure_parent(path: &PathBuf) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    Ok(())
}

fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    let kind = args.kind.kind();
    let params = pointmorph::ShapeParams {
        radius: args.radius,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let cloud = pointmorph::generate(kind, args.count, &params, &mut rng);

    ensure_parent(&args.out)?;
    let f = std::fs::File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(
        f,
        &CloudDump {
            kind: kind.name(),
            count: cloud.len(),
            points: &cloud,
        },
    )
    .with_context(|| "serialize point cloud")?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let variant = args.variant.variant();
    let mut driver = pointmorph::MorphDriver::mount(&variant, args.device.class())?;

    let settings = pointmorph::SurfaceSettings {
        viewport: pointmorph::Viewport::new(args.width, args.height, args.dpr)?,
        clear_rgba: Some([18, 20, 28, 255]),
    };
    let mut surface = pointmorph::SpriteSurface::new(settings)?;

    let packet = driver.advance(args.progress, args.time)?;
    surface.present(&packet)?;
    let frame = surface.frame();

    ensure_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
