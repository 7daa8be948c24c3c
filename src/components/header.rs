//! Site header with theme toggle

use maud::{Markup, html};

use crate::theme::{ThemeMode, ThemeModeBundle};

/// Accessible label of the toggle button while `mode` is active.
pub fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Switch to dark mode",
        ThemeMode::Dark => "Switch to light mode",
    }
}

/// Renders the fixed app bar
///
/// Shows the site title linking home and a toggle button reflecting the
/// bundle's mode. The button offers the opposite mode.
///
/// # Arguments
///
/// * `site_title`: Title from site metadata
/// * `theme`: Mode snapshot and toggle for this render pass
///
/// # Returns
///
/// Header markup
pub fn header(site_title: &str, theme: &ThemeModeBundle) -> Markup {
    let icon = match theme.mode {
        ThemeMode::Light => "ph ph-moon",
        ThemeMode::Dark => "ph ph-sun",
    };
    let label = toggle_label(theme.mode);

    html! {
        header class="chrome-header" data-theme=(theme.mode.as_str()) {
            div class="chrome-toolbar" {
                a href="/" class="chrome-title" { (site_title) }
                button type="button" class="theme-toggle"
                    data-mode=(theme.mode.as_str())
                    aria-label=(label)
                    title=(label) {
                    i class=(icon) {}
                }
            }
        }
    }
}
