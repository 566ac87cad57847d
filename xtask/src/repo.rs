use std::env;
use std::path::{Path, PathBuf};

/// Walk up from the current directory to the workspace manifest.
///
/// Member manifests (such as `xtask/Cargo.toml`) are skipped so that the data
/// directory and cargo steps resolve against the top-level package.
pub fn workspace_root() -> anyhow::Result<PathBuf> {
    let start = env::current_dir()?;
    let mut fallback = None;
    let mut dir = start.clone();
    loop {
        let manifest = dir.join("Cargo.toml");
        if manifest.is_file() {
            if declares_workspace(&manifest) {
                return Ok(dir);
            }
            fallback.get_or_insert_with(|| dir.clone());
        }
        if !dir.pop() {
            break;
        }
    }
    fallback.ok_or_else(|| anyhow::anyhow!("no Cargo.toml found above {}", start.display()))
}

fn declares_workspace(manifest: &Path) -> bool {
    std::fs::read_to_string(manifest)
        .map(|text| text.lines().any(|line| line.trim() == "[workspace]"))
        .unwrap_or(false)
}

/// Path shown in reports: relative to the workspace when possible.
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
