use std::path::PathBuf;

use clap::Parser;

mod assemble;
mod capture;
mod workspace;

#[derive(Parser, Debug)]
#[command(name = "svg2gif", version, about = "Render an animated SVG into a looping GIF")]
struct Cli {
    /// Input animated SVG path.
    input: PathBuf,

    /// Output GIF path.
    output: PathBuf,

    /// Number of frames to capture.
    #[arg(short, long, default_value_t = 12)]
    frames: u32,

    /// Milliseconds to wait before each capture; also drives the GIF
    /// per-frame delay.
    #[arg(short = 't', long, default_value_t = 1000)]
    frame_duration: u32,

    /// Working directory for intermediate PNG frames.
    #[arg(short = 'd', long, default_value = "frames")]
    frame_directory: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    workspace::clear_frames_dir(&cli.frame_directory)?;
    capture::extract_frames(&cli.input, cli.frames, cli.frame_duration, &cli.frame_directory)?;
    assemble::create_gif(&cli.output, cli.frame_duration, &cli.frame_directory)?;

    Ok(())
}
