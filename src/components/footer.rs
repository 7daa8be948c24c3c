//! Page footer component

use maud::{Markup, html};

/// Renders page footer with site name and generator attribution
pub fn footer(site_title: &str) -> Markup {
    html! {
        footer class="chrome-footer" {
            p {
                (site_title)
                " · Generated by "
                span class="chrome-generator" { "pagechrome" }
            }
        }
    }
}
