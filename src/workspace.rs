//! Workspace preparation for the frame directory

use std::fs;
use std::path::Path;

use anyhow::Context as _;

/// Clear all files in the frames directory, or create it if absent.
///
/// Only regular files directly inside the directory are removed;
/// subdirectories and their contents are left alone. Frames from a previous
/// run are gone after this, irreversibly.
pub fn clear_frames_dir(frames_dir: &Path) -> anyhow::Result<()> {
    if frames_dir.exists() {
        let entries = fs::read_dir(frames_dir)
            .with_context(|| format!("read frames directory '{}'", frames_dir.display()))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("read entry in '{}'", frames_dir.display()))?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("stat '{}'", entry.path().display()))?;
            if file_type.is_file() {
                fs::remove_file(entry.path())
                    .with_context(|| format!("remove '{}'", entry.path().display()))?;
            }
        }

        println!("Cleared the frames directory: {}", frames_dir.display());
    } else {
        fs::create_dir_all(frames_dir)
            .with_context(|| format!("create frames directory '{}'", frames_dir.display()))?;
        println!("Created frames directory: {}", frames_dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("work").join("frames");

        clear_frames_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn clears_flat_files_but_keeps_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();

        for i in 0..5 {
            fs::write(dir.join(format!("frame_{}.png", i)), b"stale").unwrap();
        }
        let sub = dir.join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("keep.png"), b"keep").unwrap();

        clear_frames_dir(&dir).unwrap();

        let remaining: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(remaining.len(), 1);
        assert!(sub.is_dir());
        assert!(sub.join("keep.png").is_file());
    }

    #[test]
    fn clearing_twice_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        fs::write(dir.join("frame_0.png"), b"stale").unwrap();

        clear_frames_dir(&dir).unwrap();
        clear_frames_dir(&dir).unwrap();

        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }
}
