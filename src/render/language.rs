//! Fence language hints keyed by file extension

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

static LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("go", "go"),
        ("templ", "go"),
        ("py", "python"),
        ("js", "javascript"),
        ("ts", "typescript"),
        ("java", "java"),
        ("c", "c"),
        ("h", "c"),
        ("cpp", "cpp"),
        ("cxx", "cpp"),
        ("cc", "cpp"),
        ("hpp", "cpp"),
        ("cs", "csharp"),
        ("rb", "ruby"),
        ("php", "php"),
        ("swift", "swift"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("rs", "rust"),
        ("html", "html"),
        ("htm", "html"),
        ("gohtml", "html"),
        ("css", "css"),
        ("sql", "sql"),
        ("sh", "bash"),
        ("pl", "perl"),
        ("r", "r"),
        // also MATLAB, but Objective-C is the more common hit
        ("m", "objectivec"),
        ("vb", "vbnet"),
        ("scala", "scala"),
        ("lua", "lua"),
        ("groovy", "groovy"),
        ("dart", "dart"),
        ("md", "markdown"),
        ("markdown", "markdown"),
        ("json", "json"),
        ("xml", "xml"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("tex", "tex"),
        ("dockerfile", "dockerfile"),
        ("df", "dockerfile"),
        ("ps1", "powershell"),
        ("scss", "scss"),
        ("toml", "toml"),
        ("zig", "zig"),
        ("nim", "nim"),
        ("hs", "haskell"),
    ]
    .into_iter()
    .collect()
});

/// Language tag for the fence opening `path`, or `""` when unknown.
///
/// Only the lower-cased extension of the base name is consulted, so a
/// dotfile such as `.bashrc` has no extension and no tag.
pub fn detect_language(path: &str) -> &'static str {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| LANGUAGES.get(ext.to_ascii_lowercase().as_str()).copied())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::detect_language;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(detect_language("main.go"), "go");
        assert_eq!(detect_language("views/index.templ"), "go");
        assert_eq!(detect_language("src/lib.rs"), "rust");
        assert_eq!(detect_language("app.py"), "python");
        assert_eq!(detect_language("README.md"), "markdown");
        assert_eq!(detect_language("docs/guide.markdown"), "markdown");
        assert_eq!(detect_language("ci.yml"), "yaml");
        assert_eq!(detect_language("include/vec.hpp"), "cpp");
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(detect_language("MAIN.GO"), "go");
        assert_eq!(detect_language("Notes.Md"), "markdown");
    }

    #[test]
    fn uses_last_extension_of_base_name() {
        assert_eq!(detect_language("archive.tar.go"), "go");
        assert_eq!(detect_language("dir.rs/file"), "");
    }

    #[test]
    fn unknown_or_missing_extension_yields_empty_tag() {
        assert_eq!(detect_language("Makefile"), "");
        assert_eq!(detect_language("data.xyz"), "");
        assert_eq!(detect_language(".bashrc"), "");
    }
}
