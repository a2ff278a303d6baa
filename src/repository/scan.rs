use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::PlatformFile;

use super::{ItemFile, PLATFORM_FILE, RepositoryItem};

fn should_ignore_name(name: &str) -> bool {
    matches!(name, ".git")
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("read dir {}", dir.display()))?
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("collect dir entries for {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

pub(super) fn scan_items(root: &Path) -> Result<Vec<RepositoryItem>> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let platform = dir.join(PLATFORM_FILE);
        if platform.is_file() {
            out.push(read_item(&dir, &platform)?);
            // Items do not nest.
            continue;
        }

        for entry in read_dir_sorted(&dir)? {
            let path = entry.path();
            if should_ignore_name(&entry.file_name().to_string_lossy()) || !path.is_dir() {
                continue;
            }
            stack.push(path);
        }
    }

    Ok(out)
}

fn read_item(dir: &Path, platform: &Path) -> Result<RepositoryItem> {
    let bytes = fs::read(platform).with_context(|| format!("read {}", platform.display()))?;
    let parsed: PlatformFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse {}", platform.display()))?;
    Ok(RepositoryItem {
        item_type: parsed.metadata.item_type,
        name: parsed.metadata.display_name,
        logical_id: parsed.config.and_then(|c| c.logical_id),
        path: dir.to_path_buf(),
    })
}

pub(super) fn collect_files(base: &Path, prefix: &Path, out: &mut Vec<ItemFile>) -> Result<()> {
    let dir = base.join(prefix);
    for entry in read_dir_sorted(&dir)? {
        let rel = prefix.join(entry.file_name());
        let path = entry.path();
        if path.is_dir() {
            collect_files(base, &rel, out)?;
        } else {
            let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            out.push(ItemFile::from_bytes(rel, bytes));
        }
    }
    Ok(())
}
