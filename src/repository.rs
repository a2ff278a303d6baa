//! Items discovered in a local repository checkout.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

mod paths;
mod scan;

pub use self::paths::normalize_path;

/// Metadata file that marks a directory as an item.
pub const PLATFORM_FILE: &str = ".platform";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryItem {
    pub item_type: String,
    pub name: String,
    pub logical_id: Option<String>,
    /// Absolute, normalized item directory.
    pub path: PathBuf,
}

impl RepositoryItem {
    /// Every file under the item directory, sorted by relative path.
    pub fn files(&self) -> Result<Vec<ItemFile>> {
        let mut out = Vec::new();
        scan::collect_files(&self.path, Path::new(""), &mut out)?;
        Ok(out)
    }

    /// Directory name of the item, e.g. `Sales.Report`.
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", self.name, self.item_type))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileContents {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContents {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Binary(b) => b,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(s) => s.into_bytes(),
            Self::Binary(b) => b,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemFile {
    pub name: String,
    pub relative_path: PathBuf,
    pub contents: FileContents,
}

impl ItemFile {
    pub fn from_bytes(relative_path: PathBuf, bytes: Vec<u8>) -> Self {
        let name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let contents = match String::from_utf8(bytes) {
            Ok(text) => FileContents::Text(text),
            Err(err) => FileContents::Binary(err.into_bytes()),
        };
        Self {
            name,
            relative_path,
            contents,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.contents.as_text()
    }

    pub fn bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }
}

#[derive(Clone, Debug)]
pub struct Repository {
    root: PathBuf,
    items: BTreeMap<(String, String), RepositoryItem>,
}

impl Repository {
    /// Scans `root` for directories holding a `.platform` file.
    pub fn scan(root: &Path) -> Result<Self> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("resolve repository root {}", root.display()))?;
        let items = scan::scan_items(&root)?;
        tracing::debug!(root = %root.display(), items = items.len(), "scanned repository");
        Self::from_items(&root, items)
    }

    pub fn from_items(root: &Path, items: impl IntoIterator<Item = RepositoryItem>) -> Result<Self> {
        let mut by_key: BTreeMap<(String, String), RepositoryItem> = BTreeMap::new();
        for mut item in items {
            item.path = normalize_path(&item.path);
            let key = (item.item_type.clone(), item.name.clone());
            if let Some(prev) = by_key.get(&key) {
                anyhow::bail!(
                    "duplicate {} item '{}' at {} and {}",
                    item.item_type,
                    item.name,
                    prev.path.display(),
                    item.path.display()
                );
            }
            by_key.insert(key, item);
        }
        Ok(Self {
            root: normalize_path(root),
            items: by_key,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Items of one type, ordered by name.
    pub fn items_of_type<'a, 't>(
        &'a self,
        item_type: &'t str,
    ) -> impl Iterator<Item = &'a RepositoryItem> + use<'a, 't> {
        self.items
            .values()
            .filter(move |item| item.item_type == item_type)
    }

    pub fn get(&self, item_type: &str, name: &str) -> Option<&RepositoryItem> {
        self.items.get(&(item_type.to_string(), name.to_string()))
    }

    pub fn find_by_path(&self, item_type: &str, path: &Path) -> Option<&RepositoryItem> {
        let path = normalize_path(path);
        self.items
            .values()
            .find(|item| item.item_type == item_type && item.path == path)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/repository/scan_tests.rs"]
mod tests;
