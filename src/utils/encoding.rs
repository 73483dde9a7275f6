//! Binary detection by sampling the head of a file

use crate::error::{Result, SourcePromptError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when classifying a file.
pub const SNIFF_LEN: usize = 1024;

/// Returns `true` when the first [`SNIFF_LEN`] bytes of `path` are not valid UTF-8.
///
/// A file shorter than the sample is classified from whatever bytes exist;
/// an empty file is text. Open and read failures are returned as errors.
pub fn is_binary_file(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|e| SourcePromptError::io(path, e))?;
    let mut sample = Vec::with_capacity(SNIFF_LEN);
    // A short read is not an error; the sample is simply smaller.
    file.take(SNIFF_LEN as u64)
        .read_to_end(&mut sample)
        .map_err(|e| SourcePromptError::io(path, e))?;
    Ok(looks_binary(&sample))
}

/// Classify a byte sample.
///
/// A multi-byte character cut off by the end of the sample does not make
/// the sample binary.
pub fn looks_binary(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn plain_text_is_not_binary() {
        assert!(!looks_binary(b"package main\n"));
        assert!(!looks_binary("héllo wörld".as_bytes()));
    }

    #[test]
    fn invalid_utf8_is_binary() {
        assert!(looks_binary(&[0xff, 0xfe, 0x00, 0x01]));
        assert!(looks_binary(b"abc\xc3\x28def"));
    }

    #[test]
    fn truncated_multibyte_char_at_sample_end_is_text() {
        // "é" is 0xc3 0xa9; keep only the lead byte.
        let mut sample = vec![b'a'; SNIFF_LEN - 1];
        sample.push(0xc3);
        assert!(!looks_binary(&sample));
    }

    #[test]
    fn small_and_empty_files_are_text() {
        let dir = TempDir::new().expect("temp dir");
        let small = dir.path().join("small.txt");
        let empty = dir.path().join("empty.txt");
        fs::write(&small, "x").expect("write small");
        fs::write(&empty, "").expect("write empty");

        assert!(!is_binary_file(&small).expect("sniff small"));
        assert!(!is_binary_file(&empty).expect("sniff empty"));
    }

    #[test]
    fn only_the_sample_is_inspected() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("late_binary.txt");
        let mut content = vec![b'a'; SNIFF_LEN];
        content.extend_from_slice(&[0xff, 0xff, 0xff]);
        fs::write(&path, content).expect("write file");

        assert!(!is_binary_file(&path).expect("sniff"));
    }

    #[test]
    fn binary_file_is_detected() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("img.bin");
        fs::write(&path, [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0xff, 0x00])
            .expect("write file");

        assert!(is_binary_file(&path).expect("sniff"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let err = is_binary_file(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, SourcePromptError::Io { .. }));
    }
}
