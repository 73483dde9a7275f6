//! Final output sink: a file or standard output

use crate::error::{Result, SourcePromptError};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_to_file(path: &Path, content: &[u8]) -> Result<()> {
    let write_err =
        |source: io::Error| SourcePromptError::OutputWrite { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SourcePromptError::OutputWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    debug!(file = %path.display(), bytes = content.len(), "File saved successfully");
    Ok(())
}

/// Print `content` followed by a newline.
pub fn write_to_stdout(content: &[u8]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_line(&mut handle, content).map_err(|source| SourcePromptError::OutputWrite {
        path: "<stdout>".into(),
        source,
    })
}

fn write_line<W: Write>(writer: &mut W, content: &[u8]) -> io::Result<()> {
    writer.write_all(content)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Send `content` to `path` if given, otherwise to stdout.
pub fn emit(content: &[u8], path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            debug!(file = %path.display(), "Saving output");
            write_to_file(path, content)
        }
        None => write_to_stdout(content),
    }
}
