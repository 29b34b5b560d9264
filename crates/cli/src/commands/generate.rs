//! `relnotes generate` — Render a changelog from an issues file.

use std::io::Write;
use std::path::Path;

use relnotes_core::{Error, Issue};
use relnotes_sections::collate;
use tracing::info;

use super::load_config;
use crate::render::render_markdown;

pub fn run(
    config_path: Option<&Path>,
    issues_path: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let registry = config.registry();
    let issues = read_issues(issues_path)?;

    let collated = collate(&registry, &issues);
    info!(
        issues = issues.len(),
        included = collated.issue_count(),
        sections = collated.len(),
        "Generated changelog"
    );

    let markdown = render_markdown(&collated, &config.render);
    match output {
        Some(path) => std::fs::write(path, markdown).map_err(Error::from)?,
        None => std::io::stdout()
            .lock()
            .write_all(markdown.as_bytes())
            .map_err(Error::from)?,
    }
    Ok(())
}

/// Read a JSON array of issues.
pub fn read_issues(path: &Path) -> Result<Vec<Issue>, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Issues {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Issues {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
