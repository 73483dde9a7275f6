//! sourceprompt: convert a codebase into a single LLM prompt

use anyhow::Result;

fn main() -> Result<()> {
    sourceprompt::cli::run()
}
