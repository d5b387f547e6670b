//! Transient audio artifact storage
//!
//! Synthesized audio is written to local storage and read back before
//! playback. The write is flushed and synced before the handle is released,
//! so a read that follows always sees the complete payload — including when
//! the caller bails out early on a synthesis error, since the handle is
//! scoped to the save call.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};

use super::AudioFormat;

/// Directory-backed store for transient audio artifacts.
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Write a complete audio payload, returning the artifact path.
    ///
    /// The file handle is scoped to this call: the payload is fully written,
    /// flushed and synced before the handle is dropped on every exit path.
    pub fn save(&self, name: &str, format: AudioFormat, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.join(format!("{name}.{}", format.extension()));
        {
            let mut file = File::create(&path)?;
            file.write_all(bytes)?;
            file.flush()?;
            file.sync_all()?;
        }
        debug!(path = %path.display(), size = bytes.len(), "Saved audio artifact");
        Ok(path)
    }

    /// Read an artifact back for playback. The read handle is released once
    /// the bytes are captured.
    pub fn load(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let mut file = File::open(path)?;
            file.read_to_end(&mut bytes)?;
        }
        Ok(bytes)
    }

    /// Remove artifacts older than `max_age`. Returns the number removed.
    ///
    /// Runs at startup; artifacts are transient and anything left behind by
    /// a previous run is stale.
    pub fn prune_older_than(&self, max_age: Duration) -> std::io::Result<usize> {
        let now = SystemTime::now();
        let mut removed = 0usize;

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let modified = match entry.metadata().and_then(|m| m.modified()) {
                Ok(t) => t,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping artifact with unreadable mtime");
                    continue;
                }
            };
            let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
            if age > max_age {
                if let Err(e) = std::fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "Failed to prune audio artifact");
                } else {
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::open(dir.path()).unwrap();

        let payload = vec![0xFFu8, 0xFB, 0x90, 0x00, 0x12, 0x34];
        let path = store.save("output", AudioFormat::Mp3, &payload).unwrap();
        assert!(path.extension().is_some_and(|e| e == "mp3"));

        let back = store.load(&path).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("audio").join("cache");
        let store = AudioStore::open(&nested).unwrap();
        store.save("a", AudioFormat::Mp3, b"xyz").unwrap();
        assert!(nested.join("a.mp3").exists());
    }

    #[test]
    fn prune_removes_only_old_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::open(dir.path()).unwrap();
        let fresh = store.save("fresh", AudioFormat::Mp3, b"abc").unwrap();

        // The just-written file is far younger than the max age and survives.
        let removed = store.prune_older_than(Duration::from_secs(3600)).unwrap();
        assert_eq!(removed, 0);
        assert!(fresh.exists());
    }

    #[test]
    fn load_missing_artifact_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = AudioStore::open(dir.path()).unwrap();
        assert!(store.load(&dir.path().join("missing.mp3")).is_err());
    }
}
