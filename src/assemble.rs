//! Animation assembly: encode captured frames into a looping GIF

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

/// Create a looping GIF from the extracted PNG frames.
///
/// Frames are ordered by the index embedded in their filename, numerically,
/// since the capture step does not zero-pad (`frame_2.png` sorts before
/// `frame_10.png`). The per-frame delay is `frame_duration / 10`
/// milliseconds, matching the tool's historical behavior of reusing the
/// capture interval with a fixed division rather than a unit conversion.
pub fn create_gif(output: &Path, frame_duration: u32, frames_dir: &Path) -> anyhow::Result<()> {
    let mut frame_files: Vec<(u32, PathBuf)> = Vec::new();
    let entries = fs::read_dir(frames_dir)
        .with_context(|| format!("read frames directory '{}'", frames_dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("read entry in '{}'", frames_dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".png") {
            continue;
        }
        let index = frame_index(&name)
            .ok_or_else(|| anyhow::anyhow!("unexpected frame filename '{}'", name))?;
        frame_files.push((index, entry.path()));
    }

    frame_files.sort_by_key(|(index, _)| *index);

    anyhow::ensure!(
        !frame_files.is_empty(),
        "no frames found in '{}'",
        frames_dir.display()
    );

    let file = File::create(output)
        .with_context(|| format!("create gif '{}'", output.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder
        .set_repeat(Repeat::Infinite)
        .with_context(|| format!("write gif '{}'", output.display()))?;

    let delay = Delay::from_numer_denom_ms(frame_duration / 10, 1);
    for (_, path) in &frame_files {
        let frame = image::open(path)
            .with_context(|| format!("decode frame '{}'", path.display()))?
            .into_rgba8();
        encoder
            .encode_frame(Frame::from_parts(frame, 0, 0, delay))
            .with_context(|| format!("write gif '{}'", output.display()))?;
    }

    println!("GIF saved to {}", output.display());

    Ok(())
}

/// Parse the frame index out of a `frame_<i>.png` filename.
fn frame_index(name: &str) -> Option<u32> {
    name.split('_').nth(1)?.split('.').next()?.parse().ok()
}
