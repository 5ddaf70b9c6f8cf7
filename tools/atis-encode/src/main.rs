//! atis-encode - ATIS voice pack encoder
//!
//! Converts the clips under `./audio/<pack>/` into `./atis/audio.h`,
//! a header of PROGMEM arrays the firmware plays from.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use atis_encode::{
    check_output, encode, list_packs, render_header, write_output, EncodedTables, EncoderConfig,
    NumberBase,
};

#[derive(Parser)]
#[command(name = "atis-encode")]
#[command(about = "Encode an ATIS voice pack into PROGMEM C++ tables")]
#[command(version)]
struct Cli {
    /// Voice pack to encode (subdirectory of the audio directory)
    pack: Option<String>,

    /// Encoder config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the voice packs
    #[arg(long)]
    audio_dir: Option<PathBuf>,

    /// Output header path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Bytes per line in the data array
    #[arg(long)]
    row_width: Option<usize>,

    /// Render bytes in decimal instead of hex
    #[arg(long)]
    decimal: bool,

    /// Don't write; fail if the existing header is out of date
    #[arg(long)]
    check: bool,

    /// List available voice packs and exit
    #[arg(long)]
    list: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let config = load_config(&cli)?;

    if cli.list {
        let packs = list_packs(&config.audio_dir).with_context(|| {
            format!("Failed to list voice packs in {}", config.audio_dir.display())
        })?;
        for pack in packs {
            println!("{}", pack);
        }
        return Ok(());
    }

    let pack = cli.pack.clone().unwrap_or_else(|| config.default_pack.clone());
    println!("Encoding {} voice pack...", pack);

    let encoded = encode(&config, &pack)?;
    let header = render_header(&encoded.table, &config, &pack)?;

    if cli.check {
        if check_output(&config.output, &header)? {
            println!("✓ {} is in sync", config.output.display());
            return Ok(());
        }
        anyhow::bail!(
            "{} is out of sync. Run 'atis-encode {}' to regenerate.",
            config.output.display(),
            pack
        );
    }

    write_output(&config.output, &header)
        .with_context(|| format!("Failed to write header: {}", config.output.display()))?;

    print_summary(&config.output, &pack, &encoded);
    println!("Done!");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<EncoderConfig> {
    let mut config = match &cli.config {
        Some(path) => EncoderConfig::load(path)?,
        None => EncoderConfig::default(),
    };

    if let Some(audio_dir) = &cli.audio_dir {
        config.audio_dir = audio_dir.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(row_width) = cli.row_width {
        config.row_width = row_width;
    }
    if cli.decimal {
        config.byte_base = NumberBase::Decimal;
    }

    config.validate()?;
    Ok(config)
}

fn print_summary(output: &Path, pack: &str, encoded: &EncodedTables) {
    println!();
    println!("Created: {} ({} bytes of audio)", output.display(), encoded.blob.len());
    println!("  Voice pack: {}", pack);
    println!("  Clips: {}", encoded.index.len());
    for (name, (offset, len)) in encoded
        .names
        .iter()
        .zip(encoded.index.offsets().iter().zip(encoded.index.lengths()))
    {
        tracing::debug!("  {:<6} offset {:>8} length {:>8}", name, offset, len);
    }
}
