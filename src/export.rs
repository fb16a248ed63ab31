//! Best-effort export of favorited files to a destination folder.
//!
//! Each export call is an independent batch: favorites found in the source
//! folder are copied byte-for-byte, name collisions at the destination are
//! resolved with a numeric suffix, and per-file failures are collected in the
//! report instead of aborting the batch. The source folder is never mutated.

use crate::error::{AppError, Result};
use crate::favorites::FavoritesStore;
use crate::file_utils;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// A single file that could not be exported.
#[derive(Debug)]
pub struct ExportFailure {
    pub source: PathBuf,
    pub reason: String,
}

/// Outcome of one export batch.
///
/// `copied` counts every successful copy, including those that needed a
/// disambiguated name; `renamed` is that subset.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub copied: usize,
    pub renamed: usize,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        let mut summary = format!("Copied {} file(s)", self.copied);
        if self.renamed > 0 {
            summary.push_str(&format!(" ({} renamed)", self.renamed));
        }
        if !self.failures.is_empty() {
            summary.push_str(&format!(", {} failed", self.failures.len()));
        }
        summary
    }
}

/// Picks a destination path that does not exist yet.
///
/// `photo.jpg` taken becomes `photo_1.jpg`, then `photo_2.jpg`, counting up
/// until a free name is found. Existing files are never overwritten.
fn collision_free_destination(dest_dir: &Path, source: &Path) -> PathBuf {
    let file_name = source.file_name().unwrap_or_default();
    let candidate = dest_dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let extension = source.extension().map(|e| e.to_string_lossy());
    let mut index = 1usize;
    loop {
        let alt_name = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, index, ext),
            None => format!("{}_{}", stem, index),
        };
        let alt = dest_dir.join(alt_name);
        if !alt.exists() {
            return alt;
        }
        index += 1;
    }
}

/// Copies the favorites present in `source` into `destination`.
///
/// The destination folder is created if absent. Favorites recorded under the
/// source tree whose files no longer exist are reported as failures rather
/// than silently dropped. Re-running against an unchanged destination renames
/// again instead of overwriting, so repeated exports accumulate copies.
pub fn export_favorites(
    source: &Path,
    destination: &Path,
    store: &FavoritesStore,
) -> Result<ExportReport> {
    fs::create_dir_all(destination)
        .map_err(|e| AppError::Export(format!("Cannot create {:?}: {}", destination, e)))?;

    let listing = file_utils::scan_directory(source)?;
    let present = store.favorites_in_folder(&listing);

    let mut report = ExportReport::default();

    for missing in store
        .favorites_under(source)
        .into_iter()
        .filter(|p| !present.contains(p))
    {
        warn!("Favorite missing from source folder: {:?}", missing);
        report.failures.push(ExportFailure {
            source: missing,
            reason: "source file not found".to_string(),
        });
    }

    for src in &present {
        let dst = collision_free_destination(destination, src);
        let renamed = dst.file_name() != src.file_name();
        match fs::copy(src, &dst) {
            Ok(_) => {
                debug!("Exported {:?} -> {:?}", src, dst);
                report.copied += 1;
                if renamed {
                    report.renamed += 1;
                }
            }
            Err(e) => {
                warn!("Failed to copy {:?} -> {:?}: {}", src, dst, e);
                report.failures.push(ExportFailure {
                    source: src.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        _dir: tempfile::TempDir,
        source: PathBuf,
        destination: PathBuf,
        store: FavoritesStore,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let destination = dir.path().join("dest");
        fs::create_dir(&source).unwrap();
        let store = FavoritesStore::open(dir.path().join("favorites.json"));
        Fixture {
            _dir: dir,
            source,
            destination,
            store,
        }
    }

    fn add_favorite(fixture: &mut Fixture, name: &str, content: &[u8]) -> PathBuf {
        let path = fixture.source.join(name);
        fs::write(&path, content).unwrap();
        fixture.store.toggle(&path).unwrap();
        path
    }

    #[test]
    fn copies_only_favorites() {
        let mut f = fixture();
        add_favorite(&mut f, "a.jpg", b"aaa");
        fs::write(f.source.join("b.png"), b"bbb").unwrap();

        let report = export_favorites(&f.source, &f.destination, &f.store).unwrap();
        assert_eq!(report.copied, 1);
        assert_eq!(report.renamed, 0);
        assert!(report.failures.is_empty());
        assert!(f.destination.join("a.jpg").exists());
        assert!(!f.destination.join("b.png").exists());
    }

    #[test]
    fn collision_renames_instead_of_overwriting() {
        let mut f = fixture();
        add_favorite(&mut f, "photo.jpg", b"fresh");
        fs::create_dir(&f.destination).unwrap();
        fs::write(f.destination.join("photo.jpg"), b"existing").unwrap();

        let report = export_favorites(&f.source, &f.destination, &f.store).unwrap();
        assert_eq!(report.copied, 1);
        assert_eq!(report.renamed, 1);

        // Both files survive with their original contents.
        assert_eq!(
            fs::read(f.destination.join("photo.jpg")).unwrap(),
            b"existing"
        );
        assert_eq!(
            fs::read(f.destination.join("photo_1.jpg")).unwrap(),
            b"fresh"
        );
    }

    #[test]
    fn reexport_renames_again() {
        let mut f = fixture();
        add_favorite(&mut f, "photo.jpg", b"fresh");

        export_favorites(&f.source, &f.destination, &f.store).unwrap();
        let second = export_favorites(&f.source, &f.destination, &f.store).unwrap();

        // Not idempotent byte-for-byte: the second run adds a renamed copy.
        assert_eq!(second.copied, 1);
        assert_eq!(second.renamed, 1);
        assert!(f.destination.join("photo.jpg").exists());
        assert!(f.destination.join("photo_1.jpg").exists());
    }

    #[test]
    fn missing_favorite_is_reported() {
        let mut f = fixture();
        add_favorite(&mut f, "a.jpg", b"aaa");
        let gone = add_favorite(&mut f, "b.png", b"bbb");
        fs::remove_file(&gone).unwrap();

        let report = export_favorites(&f.source, &f.destination, &f.store).unwrap();
        assert_eq!(report.copied, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].reason, "source file not found");
        assert!(report.failures[0].source.ends_with("b.png"));
        assert!(f.destination.join("a.jpg").exists());
    }

    #[test]
    fn empty_store_exports_nothing() {
        let f = fixture();
        fs::write(f.source.join("a.jpg"), b"aaa").unwrap();

        let report = export_favorites(&f.source, &f.destination, &f.store).unwrap();
        assert_eq!(report.copied, 0);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn creates_missing_destination() {
        let mut f = fixture();
        add_favorite(&mut f, "a.jpg", b"aaa");
        let nested = f.destination.join("deep").join("er");

        let report = export_favorites(&f.source, &nested, &f.store).unwrap();
        assert_eq!(report.copied, 1);
        assert!(nested.join("a.jpg").exists());
    }

    #[test]
    fn summary_mentions_renames_and_failures() {
        let report = ExportReport {
            copied: 3,
            renamed: 1,
            failures: vec![ExportFailure {
                source: PathBuf::from("/photos/x.jpg"),
                reason: "source file not found".to_string(),
            }],
        };
        assert_eq!(report.summary(), "Copied 3 file(s) (1 renamed), 1 failed");
    }
}
