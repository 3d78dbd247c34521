use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sonopix::{
    ALLOWED_AUDIO_EXTENSIONS, AudioExtensionPolicy, NamePolicy, SonopixResult,
    decode_payload, downmix_mono, encode_payload, grid_to_samples, load_png, plan_dimensions,
    render_png, samples_to_grid, write_wav_mono,
};

#[derive(Parser, Debug)]
#[command(name = "sonopix", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pack an audio file losslessly into a PNG.
    Pack(PackArgs),
    /// Recover the original file from a packed PNG.
    Unpack(UnpackArgs),
    /// Map waveform amplitudes onto pixels (lossy).
    Rasterize(RasterizeArgs),
    /// Map pixel values back onto a mono waveform (lossy).
    Sonify(SonifyArgs),
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input audio file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct UnpackArgs {
    /// Input packed PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory (defaults to the PNG's directory). The file name
    /// comes from the container header.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RasterizeArgs {
    /// Input WAV file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Grid width. Planned from the sample count when omitted.
    #[arg(long)]
    width: Option<u32>,

    /// Grid height. Planned from the sample count when omitted.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct SonifyArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output WAV path.
    #[arg(long)]
    out: PathBuf,

    /// Sample rate for the reconstructed waveform. The image stores no rate;
    /// this is the caller's assumption.
    #[arg(long, default_value_t = sonopix::DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Pack(args) => cmd_pack(args),
        Command::Unpack(args) => cmd_unpack(args),
        Command::Rasterize(args) => cmd_rasterize(args),
        Command::Sonify(args) => cmd_sonify(args),
    }
}

fn require_audio_name(name: &str) -> anyhow::Result<()> {
    if !AudioExtensionPolicy.allows(name) {
        anyhow::bail!(
            "'{name}' is not a recognized audio file (allowed: {})",
            ALLOWED_AUDIO_EXTENSIONS.join(", ")
        );
    }
    Ok(())
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let name = args
        .in_path
        .file_name()
        .and_then(OsStr::to_str)
        .context("input file name is not valid UTF-8")?
        .to_string();
    require_audio_name(&name)?;

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;

    let task = sonopix::task::spawn(move || -> SonopixResult<Vec<u8>> {
        let grid = encode_payload(&name, &bytes)?;
        render_png(&grid)
    });
    let png = task.join()??;

    write_with_parents(&args.out, &png)?;
    eprintln!("wrote {} ({})", args.out.display(), human_size(png.len() as u64));
    Ok(())
}

fn cmd_unpack(args: UnpackArgs) -> anyhow::Result<()> {
    let png = std::fs::read(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;

    let task = sonopix::task::spawn(move || -> SonopixResult<(String, Vec<u8>)> {
        let grid = load_png(&png)?;
        decode_payload(&grid)
    });
    let (name, payload) = task.join()??;
    require_audio_name(&name)?;

    let out_dir = args.out_dir.unwrap_or_else(|| {
        args.in_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    let out_path = out_dir.join(&name);
    write_with_parents(&out_path, &payload)?;
    eprintln!(
        "wrote {} ({})",
        out_path.display(),
        human_size(payload.len() as u64)
    );
    Ok(())
}

fn cmd_rasterize(args: RasterizeArgs) -> anyhow::Result<()> {
    let pcm = sonopix::read_wav(&args.in_path)?;
    let mono = downmix_mono(&pcm.interleaved_f32, pcm.channels);

    let (width, height) = match (args.width, args.height) {
        (Some(w), Some(h)) => (w, h),
        (None, None) => plan_dimensions(mono.len()),
        _ => anyhow::bail!("--width and --height must be given together"),
    };

    let grid = samples_to_grid(&mono, width, height)?;
    let png = render_png(&grid)?;
    write_with_parents(&args.out, &png)?;
    eprintln!(
        "wrote {} ({}x{}, {} samples, lossy)",
        args.out.display(),
        width,
        height,
        mono.len()
    );
    Ok(())
}

fn cmd_sonify(args: SonifyArgs) -> anyhow::Result<()> {
    let png = std::fs::read(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;
    let grid = load_png(&png)?;
    let samples = grid_to_samples(&grid);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_wav_mono(&args.out, &samples, args.sample_rate)?;
    eprintln!(
        "wrote {} ({} samples at {} Hz, lossy)",
        args.out.display(),
        samples.len(),
        args.sample_rate
    );
    Ok(())
}

fn write_with_parents(path: &std::path::Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn human_size(n: u64) -> String {
    let mut v = n as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if v < 1024.0 {
            return format!("{v:.2} {unit}");
        }
        v /= 1024.0;
    }
    format!("{v:.2} PB")
}
