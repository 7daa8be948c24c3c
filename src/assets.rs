//! Bundled chrome assets

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::theme::palette_css;

const BASE: &str = include_str!("../assets/base.css");
const HEADER: &str = include_str!("../assets/components/header.css");
const PROGRESS: &str = include_str!("../assets/components/progress.css");
const SCROLL_TOP: &str = include_str!("../assets/components/scroll-top.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");

const RUNTIME: &str = include_str!("../assets/chrome.js");

/// Writes the chrome stylesheet and client runtime to the assets directory
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    let palettes = palette_css();
    write_bundled(
        assets_dir,
        "chrome.css",
        &[BASE, &palettes, HEADER, PROGRESS, SCROLL_TOP, FOOTER],
    )?;
    write_bundled(assets_dir, "chrome.js", &[RUNTIME])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
