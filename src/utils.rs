use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ImgvisError, Result};

/// Create the output directory if it does not exist yet and return its path
pub fn create_output_directory(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        if !path.is_dir() {
            return Err(ImgvisError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "not a directory"),
            ));
        }
        log::debug!("Directory {:?} already exists, reusing it.", path);
    } else {
        fs::create_dir_all(path).map_err(|e| ImgvisError::io(path, e))?;
    }
    Ok(path.to_path_buf())
}

/// Write `content` to `path`, replacing any existing file
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| ImgvisError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ImgvisError::io(path, e))
}

/// File name for a plugin's documentation page
pub fn doc_file_name(plugin: &str) -> String {
    sanitize_filename::sanitize(format!("{}.md", plugin))
}
