use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use walkdir::WalkDir;
use crate::fusion::config::IndexOptions;
/// Recording id -> file path for a single source tree.
#[derive(Clone, Debug, Default)]
pub struct FileIndex {
    entries: BTreeMap<String, PathBuf>,
    files_seen: usize,
}
impl FileIndex {
    /// Later inserts replace earlier ones for the same id.
    pub fn insert(&mut self, id: String, path: PathBuf) {
        self.files_seen += 1;
        if let Some(previous) = self.entries.insert(id, path) {
            debug!("id collision, replacing {}", previous.display());
        }
    }
    pub fn get(&self, id: &str) -> Option<&PathBuf> {
        self.entries.get(id)
    }
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Accepted files, counting the ones that lost an id collision.
    pub fn files_seen(&self) -> usize {
        self.files_seen
    }
}
/// Strips every configured suffix token from a file stem, one token after another.
pub fn normalize_id(stem: &str, suffixes: &[String]) -> String {
    suffixes
        .iter()
        .fold(stem.to_owned(), |id, suffix| id.replace(suffix.as_str(), ""))
}
fn accepts(file_name: &str, options: &IndexOptions) -> bool {
    file_name.ends_with(&format!(".{}", options.extension))
        && !file_name.contains(options.excluded_token.as_str())
}
/// Recursively indexes `root`. A missing root yields an empty index.
///
/// Symlinked directories are not descended into; symlinked files are indexed.
pub fn scan_directory(root: &Path, options: &IndexOptions) -> FileIndex {
    let mut index = FileIndex::default();
    if !root.is_dir() {
        warn!("source folder not found: {}", root.display());
        return index;
    }
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            warn!("skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };
        if !accepts(file_name, options) {
            continue;
        }
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let id = normalize_id(stem, &options.strip_suffixes);
        index.insert(id, entry.into_path());
    }
    info!("scanned {}: found {} files", root.display(), index.files_seen());
    index
}
