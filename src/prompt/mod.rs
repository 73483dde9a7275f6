//! Instructional prompt placed ahead of the rendered files

use crate::domain::Config;
use crate::error::{Result, SourcePromptError};
use crate::fetch::{fetch_repository, is_url};
use crate::render::render_tree_with_stats;
use crate::scan::PathFilter;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Built-in prompt used when no custom prompt is given.
pub const DEFAULT_PROMPT: &str = r#"You will be provided with a markdown text (under the "---" separator) containing the contents of a codebase. Each code snippet will be enclosed in code fences, along with the corresponding file name. Your task is to analyze the codebase and gain a comprehensive understanding of its structure, functionality, and key features.

Please follow these steps:

1. Read through the entire codebase carefully, paying attention to the file names and the code within each code fence.
2. Identify the main components, modules, or classes of the codebase and their responsibilities. Summarize the purpose and functionality of each significant component.
3. Analyze the relationships and dependencies between different parts of the codebase. Identify any important interactions, data flow, or control flow between the components.
4. Extract the most important features and functionalities implemented in the codebase. Highlight any critical algorithms, data structures, or design patterns used.
5. Consider the overall architecture and design of the codebase. Identify any architectural patterns or principles followed, such as MVC, MVVM, or microservices.
6. Evaluate the code quality, readability, and maintainability. Note any areas that could be improved or any potential issues or vulnerabilities.
7. Provide a summary of your analysis, including the key insights, strengths, and weaknesses of the codebase. Offer suggestions for improvements or optimizations, if applicable.
8. Based on your understanding of the codebase, provide guidance on how AI agents can effectively operate across the entire codebase. Identify the entry points, important functions, or APIs that the agents should focus on for interaction and manipulation.
9. Discuss any specific considerations or challenges that AI agents may face when working with this codebase, such as dependencies, external libraries, or platform-specific requirements.
10. Conclude your analysis by providing a high-level overview of the codebase's functionality, architecture, and potential use cases. Highlight any notable features or aspects that make this codebase unique or valuable.

Your analysis should be thorough, insightful, and aimed at enabling AI agents to effectively understand and operate within the given codebase. Provide clear explanations and examples to support your findings and recommendations.

---"#;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the prompt header comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// Raw mode: no header at all
    None,
    Default,
    File(PathBuf),
    Url(String),
}

impl PromptSource {
    /// Raw mode wins, then a custom prompt, then the built-in one.
    pub fn from_config(config: &Config) -> Self {
        if config.raw {
            return PromptSource::None;
        }
        match config.prompt.as_deref() {
            Some(p) if is_url(p) => PromptSource::Url(p.to_string()),
            Some(p) => PromptSource::File(PathBuf::from(p)),
            None => PromptSource::Default,
        }
    }
}

/// Load the header text for `source`.
pub fn resolve_prompt(source: &PromptSource) -> Result<Option<String>> {
    match source {
        PromptSource::None => {
            debug!("Raw mode - skipping LLM prompt");
            Ok(None)
        }
        PromptSource::Default => Ok(Some(DEFAULT_PROMPT.to_string())),
        PromptSource::File(path) => {
            debug!(path = %path.display(), "Reading prompt file");
            let bytes = fs::read(path)
                .map_err(|source| SourcePromptError::PromptFile { path: path.clone(), source })?;
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
        PromptSource::Url(url) => {
            debug!(url = %url, "Downloading prompt file");
            fetch_prompt(url).map(Some)
        }
    }
}

fn fetch_prompt(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourcePromptError::PromptFetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text()?)
}

/// Produce the complete artifact for `input` (a local path or repository URL).
///
/// File contents are carried as raw bytes, so the result is not required
/// to be valid UTF-8.
///
/// Patterns are compiled and the prompt is resolved before anything is
/// cloned or walked. A temporary clone is removed before returning, on
/// success and on failure.
pub fn generate_prompt(input: &str, config: &Config) -> Result<Vec<u8>> {
    let filter = PathFilter::compile(&config.include, &config.exclude)?;
    let header = resolve_prompt(&PromptSource::from_config(config))?;

    let repo = fetch_repository(input, config.branch.as_deref())?;
    let (body, stats) = render_tree_with_stats(&repo.root_path, &repo.strip_prefix, &filter)?;
    debug!(
        rendered = stats.files_rendered,
        skipped_binary = stats.skipped_binary,
        skipped_filtered = stats.skipped_include + stats.skipped_exclude,
        bytes = stats.bytes_rendered,
        "Processing done"
    );

    Ok(assemble(header.as_deref(), &body))
}

/// Prefix `body` with `header` and a blank line.
pub fn assemble(header: Option<&str>, body: &[u8]) -> Vec<u8> {
    match header {
        Some(header) => {
            let mut out = Vec::with_capacity(header.len() + body.len() + 2);
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(b"\n\n");
            out.extend_from_slice(body);
            out
        }
        None => body.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn raw_mode_has_no_header() {
        let config = Config { raw: true, prompt: Some("p.txt".into()), ..Config::default() };
        assert_eq!(PromptSource::from_config(&config), PromptSource::None);
        assert_eq!(resolve_prompt(&PromptSource::None).expect("resolve"), None);
    }

    #[test]
    fn prompt_source_selection() {
        assert_eq!(PromptSource::from_config(&Config::default()), PromptSource::Default);

        let file = Config { prompt: Some("prompts/review.md".into()), ..Config::default() };
        assert_eq!(
            PromptSource::from_config(&file),
            PromptSource::File(PathBuf::from("prompts/review.md"))
        );

        let url = Config {
            prompt: Some("https://example.com/prompt.txt".into()),
            ..Config::default()
        };
        assert_eq!(
            PromptSource::from_config(&url),
            PromptSource::Url("https://example.com/prompt.txt".into())
        );
    }

    #[test]
    fn default_prompt_ends_with_separator() {
        let header = resolve_prompt(&PromptSource::Default).expect("resolve").expect("header");
        assert!(header.starts_with("You will be provided with a markdown text"));
        assert!(header.ends_with("---"));
    }

    #[test]
    fn reads_prompt_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "Review this code.").expect("write");

        let header = resolve_prompt(&PromptSource::File(path)).expect("resolve");
        assert_eq!(header.as_deref(), Some("Review this code."));
    }

    #[test]
    fn missing_prompt_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let err = resolve_prompt(&PromptSource::File(dir.path().join("none.txt"))).unwrap_err();
        assert!(matches!(err, SourcePromptError::PromptFile { .. }));
    }

    #[test]
    fn generate_prompt_renders_local_tree() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("x.go"), "package x\n").expect("write");
        fs::write(dir.path().join("x_test.go"), "package x\n").expect("write");

        let config = Config {
            raw: true,
            include: vec![r"\.go$".into()],
            exclude: vec![r"_test\.go$".into()],
            ..Config::default()
        };
        let out = generate_prompt(dir.path().to_str().expect("utf8"), &config).expect("generate");
        assert_eq!(out, b"`x.go`\n\n```go\npackage x\n```\n\n");
    }

    #[test]
    fn generate_prompt_rejects_bad_pattern_before_walking() {
        let config = Config { exclude: vec!["[".into()], ..Config::default() };
        let err = generate_prompt("/definitely/not/here", &config).unwrap_err();
        assert!(matches!(err, SourcePromptError::Pattern { .. }));
    }

    #[test]
    fn assemble_separates_header_with_blank_line() {
        assert_eq!(assemble(Some("HEAD"), b"body"), b"HEAD\n\nbody");
        assert_eq!(assemble(None, b"body"), b"body");
    }

    /// Serve a single request with a bare `404 Not Found`.
    fn serve_not_found() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = stream.write_all(
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                );
            }
        });
        format!("http://{addr}/prompt.txt")
    }

    #[test]
    fn remote_prompt_error_status_is_reported() {
        let url = serve_not_found();
        let err = resolve_prompt(&PromptSource::Url(url.clone())).unwrap_err();
        match err {
            SourcePromptError::PromptFetch { url: failed, status } => {
                assert_eq!(failed, url);
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
