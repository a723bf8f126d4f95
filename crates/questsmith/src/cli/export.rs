//! Export and convert command handlers.

use crate::{QuestsmithConfig, export_html, load_project, save_project};
use questsmith_render::Locale;
use std::path::{Path, PathBuf};

/// Overrides for `export` taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ExportOverrides {
    /// Destination; defaults to the project path with an `.html` extension
    pub output: Option<PathBuf>,
    /// Drop the navigation script regardless of config
    pub no_scripting: bool,
    /// Footer stamp; defaults to the current time
    pub stamp: Option<String>,
    /// Label language; defaults to the configured one
    pub locale: Option<Locale>,
}

/// Handles `export`.
#[tracing::instrument(skip_all, fields(project = %project.display()))]
pub fn handle_export(
    project: &Path,
    config: &QuestsmithConfig,
    overrides: ExportOverrides,
) -> anyhow::Result<()> {
    let graph = load_project(project)?;

    let mut config = config.clone();
    if overrides.no_scripting {
        config.render.include_scripting = false;
    }
    if let Some(locale) = overrides.locale {
        config.render.locale = locale;
    }
    let stamp = overrides
        .stamp
        .unwrap_or_else(|| config.current_stamp());
    let options = config.render_options(stamp);

    let output = overrides
        .output
        .unwrap_or_else(|| project.with_extension("html"));
    export_html(&output, &graph, &options)?;

    let dangling = graph.dangling_targets().len();
    if dangling > 0 {
        println!(
            "Exported {} ({} choice(s) point at unknown nodes)",
            output.display(),
            dangling
        );
    } else {
        println!("Exported {}", output.display());
    }
    Ok(())
}

/// Handles `convert`.
#[tracing::instrument]
pub fn handle_convert(input: &Path, output: &Path) -> anyhow::Result<()> {
    let graph = load_project(input)?;
    save_project(output, &graph)?;
    println!("Wrote {}", output.display());
    Ok(())
}
