//! Static page output

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::assets::write_assets;
use crate::components::layout::Layout;
use crate::config::Config;
use crate::dom::Host;
use crate::theme::ThemeModeCoordinator;

/// Writes the chrome-wrapped page and its assets to the output directory.
///
/// The page is rendered without a browser host, so the affordance starts
/// hidden and the bundled client runtime takes over in the browser.
///
/// # Returns
///
/// Path of the written `index.html`
///
/// # Errors
///
/// Returns error if:
/// - Output or assets directory cannot be created
/// - Content file cannot be read
/// - Any file cannot be written
pub fn write_site(config: &Config) -> Result<PathBuf> {
    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_assets(&assets_dir)?;

    let content = load_content(config)?;
    let layout = Layout::new(
        config.layout_props(),
        ThemeModeCoordinator::with_initial(config.mode),
        &Host::detached(),
        config.trigger_options(),
    )
    .context("Failed to build page chrome")?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, layout.render(content).into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    info!(path = %index_path.display(), mode = %config.mode, "page written");
    Ok(index_path)
}

fn load_content(config: &Config) -> Result<Markup> {
    match &config.content {
        Some(path) => {
            let fragment = fs::read_to_string(path)
                .with_context(|| format!("Failed to read content: {}", path.display()))?;
            Ok(PreEscaped(fragment))
        }
        None => Ok(html! {
            section class="placeholder" {
                h1 { (config.title) }
                @if !config.description.is_empty() {
                    p { (config.description) }
                }
            }
        }),
    }
}
