//! Writing downloads to disk.

use genie_domain::DownloadArtifact;
use std::io;
use std::path::{Path, PathBuf};

/// Write `artifact` into `dir` as plain text, replacing any existing file.
///
/// Returns the path written.
pub fn save_download(dir: &Path, artifact: &DownloadArtifact) -> io::Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        std::fs::create_dir_all(dir)?;
    }
    let path = dir.join(&artifact.file_name);
    let mut content = artifact.content.clone();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    std::fs::write(&path, content)?;
    Ok(path)
}
