//! wavio CLI - inspect and edit PCM samples of WAV files in place

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wavio_lib::format::{detect_format_from_extension, Frame, WaveFile, WaveSpec};
use wavio_lib::util::SampleFormat;
use wavio_lib::{init, Config};

#[derive(Parser)]
#[command(name = "wavio")]
#[command(about = "Read and write individual PCM frames of WAV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Bits {
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

impl From<Bits> for SampleFormat {
    fn from(bits: Bits) -> Self {
        match bits {
            Bits::Eight => SampleFormat::U8,
            Bits::Sixteen => SampleFormat::I16,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header of a WAV file
    Info {
        /// Input file path
        input: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print one frame
    Get {
        /// Input file path
        input: PathBuf,

        /// Frame index
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Overwrite one frame in place
    Set {
        /// Input file path
        input: PathBuf,

        /// Frame index
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// One value for mono files, two for stereo
        #[arg(required = true, num_args = 1..=2, allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Print a range of frames
    Dump {
        /// Input file path
        input: PathBuf,

        /// First frame index
        #[arg(short, long, default_value = "0")]
        start: i64,

        /// Number of frames (defaults to the rest of the file)
        #[arg(short, long)]
        count: Option<u64>,
    },

    /// Create a silent WAV file
    Create {
        /// Output file path
        output: PathBuf,

        /// Number of channels (1 or 2)
        #[arg(short, long, default_value = "1")]
        channels: u16,

        /// Bits per sample
        #[arg(short, long, value_enum, default_value = "16")]
        bits: Bits,

        /// Sample rate in Hz
        #[arg(short, long, default_value = "44100")]
        rate: u32,

        /// Number of frames
        #[arg(short, long)]
        frames: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    })?;

    info!("wavio v{}", wavio_lib::VERSION);

    match cli.command {
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Get { input, index } => cmd_get(&input, index),
        Commands::Set {
            input,
            index,
            values,
        } => cmd_set(&input, index, &values),
        Commands::Dump {
            input,
            start,
            count,
        } => cmd_dump(&input, start, count),
        Commands::Create {
            output,
            channels,
            bits,
            rate,
            frames,
        } => cmd_create(&output, WaveSpec::new(channels, rate, bits.into()), frames),
    }
}

fn open_wav(path: &Path) -> anyhow::Result<WaveFile<File>> {
    if detect_format_from_extension(&path.to_string_lossy()).is_none() {
        warn!("{} does not have a .wav extension", path.display());
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    WaveFile::open(file).map_err(|e| {
        let what = if e.is_header_error() {
            "Invalid WAV header in"
        } else {
            "Failed to read"
        };
        anyhow::Error::new(e).context(format!("{} {}", what, path.display()))
    })
}

fn cmd_info(input: &Path, json: bool) -> anyhow::Result<()> {
    let wav = open_wav(input)?;
    let desc = wav.descriptor();

    if json {
        println!("{}", serde_json::to_string_pretty(desc)?);
        return Ok(());
    }

    println!("File: {}", input.display());
    println!("  Channels: {}", desc.channels);
    println!("  Sample Rate: {} Hz", desc.sample_rate);
    println!("  Sample Format: {}", desc.sample_format);
    println!("  Bits Per Sample: {}", desc.bits_per_sample());
    println!("  Block Align: {}", desc.block_align);
    println!("  Frames: {}", desc.frame_count);
    println!("  Duration: {:.2}s", desc.duration_seconds());
    println!("  Data Offset: {}", desc.data_start);

    Ok(())
}

fn cmd_get(input: &Path, index: i64) -> anyhow::Result<()> {
    let mut wav = open_wav(input)?;
    println!("{}", wav.get(index)?);
    Ok(())
}

fn cmd_set(input: &Path, index: i64, values: &[i32]) -> anyhow::Result<()> {
    let frame = Frame::from_samples(values)
        .ok_or_else(|| anyhow::anyhow!("Expected one or two sample values"))?;

    let mut wav = open_wav(input)?;
    wav.set(index, frame)?;
    wav.flush()?;

    info!("Frame {} of {} set to {}", index, input.display(), frame);
    Ok(())
}

fn cmd_dump(input: &Path, start: i64, count: Option<u64>) -> anyhow::Result<()> {
    let mut wav = open_wav(input)?;
    let count = match count {
        Some(count) => count,
        None => wav.len().saturating_sub(start.max(0) as u64),
    };

    // One frame at a time: the declared length may exceed what the file holds.
    for offset in 0..count {
        let index = start.saturating_add(i64::try_from(offset).unwrap_or(i64::MAX));
        println!("{}\t{}", index, wav.get(index)?);
    }
    Ok(())
}

fn cmd_create(output: &Path, spec: WaveSpec, frames: u64) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let wav = WaveFile::create(file, spec, frames)?;
    println!("Created {}: {}", output.display(), wav.descriptor());
    Ok(())
}
