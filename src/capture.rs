//! Frame capture: sample the rendered SVG at fixed intervals

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use svg2gif::{Surface, SurfaceConfig};

/// Extract frames from an animated SVG and save them as PNG files.
///
/// The SVG is wrapped in a minimal HTML document and loaded into a fresh
/// rendering surface. Sampling is open-loop: before each snapshot the whole
/// process sleeps for `frame_duration` milliseconds while the animation
/// advances on its own clock, so jitter and drift relative to the animation's
/// native timing are expected.
pub fn extract_frames(
    input_svg_path: &Path,
    num_frames: u32,
    frame_duration: u32,
    frames_dir: &Path,
) -> anyhow::Result<()> {
    let svg_content = fs::read_to_string(input_svg_path)
        .with_context(|| format!("read svg '{}'", input_svg_path.display()))?;

    let mut surface = svg2gif::new_surface(SurfaceConfig::default())?;
    surface.load_html(&format!("<html><body>{}</body></html>", svg_content))?;

    for i in 0..num_frames {
        thread::sleep(Duration::from_millis(u64::from(frame_duration)));

        let png = surface.snapshot_png()?;
        let frame_path = frames_dir.join(format!("frame_{}.png", i));
        fs::write(&frame_path, png)
            .with_context(|| format!("write frame '{}'", frame_path.display()))?;
        println!("Captured frame {}", i);
    }

    surface.close()?;

    Ok(())
}
