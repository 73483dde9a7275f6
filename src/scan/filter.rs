//! Include/exclude filtering of display paths

use crate::error::{Result, SourcePromptError};
use regex::Regex;

/// Why a path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Include patterns exist and none matched
    NotIncluded,
    /// An exclude pattern matched
    Excluded,
}

/// Compiled include and exclude patterns.
///
/// A path is accepted when the include set is empty or any include pattern
/// matches, and no exclude pattern matches. Exclusion wins over inclusion.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    includes: Vec<Regex>,
    excludes: Vec<Regex>,
}

impl PathFilter {
    /// Compile pattern strings, failing on the first malformed one.
    pub fn compile<I, E>(includes: I, excludes: E) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self { includes: compile_patterns(includes)?, excludes: compile_patterns(excludes)? })
    }

    pub fn matches(&self, display_path: &str) -> bool {
        self.check(display_path).is_ok()
    }

    /// Like [`matches`](Self::matches) but reports which rule rejected the path.
    pub fn check(&self, display_path: &str) -> std::result::Result<(), Rejection> {
        if !matches(display_path, &self.includes, &[]) {
            return Err(Rejection::NotIncluded);
        }
        if self.excludes.iter().any(|re| re.is_match(display_path)) {
            return Err(Rejection::Excluded);
        }
        Ok(())
    }
}

/// Pure eligibility test for a display path.
pub fn matches(display_path: &str, includes: &[Regex], excludes: &[Regex]) -> bool {
    let included = includes.is_empty() || includes.iter().any(|re| re.is_match(display_path));
    included && !excludes.iter().any(|re| re.is_match(display_path))
}

fn compile_patterns<P>(patterns: P) -> Result<Vec<Regex>>
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|source| SourcePromptError::Pattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}
