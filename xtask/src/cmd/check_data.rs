use crate::fs;
use crate::repo;
use anyhow::Result;
use mcp_demo::providers::try_load_list;
use std::path::{Path, PathBuf};

pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let root = repo::workspace_root()?;
    let scan_root = dir.unwrap_or_else(|| root.join("data"));
    let scan_root = if scan_root.is_absolute() {
        scan_root
    } else {
        root.join(scan_root)
    };

    let files: Vec<PathBuf> = fs::walk_files(&scan_root)?
        .into_iter()
        .filter(|path| fs::is_json(path))
        .collect();
    if files.is_empty() {
        anyhow::bail!("No JSON data files found under {}", scan_root.display());
    }

    let mut problems = Vec::new();
    for file in &files {
        let rel = repo::display_path(&root, file);
        match check_file(file) {
            Ok(count) => println!("{}: {count} entries", rel.display()),
            Err(message) => problems.push(format!("{}: {message}", rel.display())),
        }
    }

    if problems.is_empty() {
        return Ok(());
    }

    println!("{}", problems.join("\n"));
    anyhow::bail!(
        "{} data file(s) would be replaced by fallback lists at runtime",
        problems.len()
    );
}

/// Same validation the server applies before it would fall back.
fn check_file(path: &Path) -> std::result::Result<usize, String> {
    try_load_list(path)
        .map(|list| list.len())
        .map_err(|err| err.to_string())
}
