//! Document head injectors

use maud::{Markup, html};

/// Stylesheet serving the Roboto face the chrome typography uses.
pub const ROBOTO_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap";

/// Renders charset, viewport, font, stylesheet and script tags
///
/// Scripts are deferred so the chrome markup is in place before they run.
///
/// # Arguments
///
/// * `stylesheets`: CSS file paths to link
/// * `scripts`: Script paths to load
///
/// # Returns
///
/// Head markup
pub fn head_tags(stylesheets: &[String], scripts: &[String]) -> Markup {
    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        script src="https://unpkg.com/@phosphor-icons/web" {}
        link rel="stylesheet" href=(ROBOTO_STYLESHEET);
        @for stylesheet in stylesheets {
            link rel="stylesheet" href=(stylesheet);
        }
        @for script in scripts {
            script src=(script) defer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_tags_include_assets() {
        // Arrange
        let stylesheets = vec!["assets/chrome.css".to_string()];
        let scripts = vec!["assets/chrome.js".to_string()];

        // Act
        let html = head_tags(&stylesheets, &scripts).into_string();

        // Assert
        assert!(html.contains("charset=\"utf-8\""));
        assert!(html.contains("href=\"assets/chrome.css\""));
        assert!(html.contains("src=\"assets/chrome.js\" defer"));
    }

    #[test]
    fn test_head_tags_load_roboto_before_chrome_styles() {
        // Arrange
        let stylesheets = vec!["assets/chrome.css".to_string()];

        // Act
        let html = head_tags(&stylesheets, &[]).into_string();

        // Assert
        let font = html.find("family=Roboto").expect("Roboto stylesheet linked");
        let chrome = html.find("assets/chrome.css").expect("Chrome stylesheet linked");
        assert!(font < chrome);
    }
}
