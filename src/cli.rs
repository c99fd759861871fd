// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "folio-scene")]
#[command(about = "Headless driver for the profile scene and scroll animations", long_about = None)]
pub struct Cli {
    /// Scene config (JSON); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the generation seed from the config
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 180)]
    pub frames: u32,

    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60.0)]
    pub hz: f32,

    /// Container size as WIDTHxHEIGHT
    #[arg(long, default_value = "1280x720", value_parser = parse_size)]
    pub size: (u32, u32),

    /// Scroll offset reached on the last frame; scrolling is linear from 0
    #[arg(long, default_value_t = 2400.0)]
    pub scroll_to: f32,

    /// Keep the logo hovered for the whole run
    #[arg(long = "hover", default_value = "false")]
    pub hover: bool,

    /// Write the final render snapshot and element values as JSON
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let parse = |s: &str| s.trim().parse::<u32>().map_err(|e| format!("bad dimension `{s}`: {e}"));
    Ok((parse(w)?, parse(h)?))
}
