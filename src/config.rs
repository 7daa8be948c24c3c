//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::components::layout::LayoutProps;
use crate::components::seo::SeoMeta;
use crate::scroll::ScrollTriggerOptions;
use crate::theme::ThemeMode;

/// Command line configuration for pagechrome.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagechrome", version, about, long_about = None)]
pub struct Config {
    /// HTML fragment placed in the main content slot
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Page title for SEO tags
    #[arg(long, default_value = "Home")]
    pub title: String,

    /// Page description for SEO tags
    #[arg(long, default_value = "")]
    pub description: String,

    /// Site title shown in the header (defaults to the page title)
    #[arg(long)]
    pub site_title: Option<String>,

    /// Document language
    #[arg(long, default_value = "zh")]
    pub lang: String,

    /// Initial theme mode (light, dark)
    #[arg(long, default_value = "light")]
    pub mode: ThemeMode,

    /// Scroll offset past which the back-to-top affordance appears
    #[arg(long, default_value_t = 100.0)]
    pub threshold: f64,

    /// Base path for site images
    #[arg(long, default_value = "/images")]
    pub images: String,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content file does not exist or the threshold is
    /// negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if let Some(content) = &self.content
            && !content.is_file()
        {
            bail!("Content file does not exist: {}", content.display());
        }

        if !self.threshold.is_finite() || self.threshold < 0.0 {
            bail!("Threshold must be a non-negative number: {}", self.threshold);
        }

        Ok(())
    }

    /// Returns the header title, falling back to the page title.
    pub fn site_title(&self) -> &str {
        self.site_title.as_deref().unwrap_or(&self.title)
    }

    pub fn seo(&self) -> SeoMeta {
        SeoMeta {
            title: self.title.clone(),
            description: self.description.clone(),
            lang: self.lang.clone(),
        }
    }

    pub fn images(&self) -> ImageResolver {
        ImageResolver::new(&self.images)
    }

    pub fn trigger_options(&self) -> ScrollTriggerOptions {
        ScrollTriggerOptions::with_threshold(self.threshold)
    }

    /// Layout inputs for a page written at the output root.
    pub fn layout_props(&self) -> LayoutProps {
        LayoutProps {
            site_title: self.site_title().to_string(),
            seo: self.seo(),
            images: self.images(),
            stylesheets: vec!["assets/chrome.css".to_string()],
            scripts: vec!["assets/chrome.js".to_string()],
        }
    }
}

/// Resolves named site images to paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base: String,
}

impl ImageResolver {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Path of a miscellaneous site image such as the scroll icon.
    pub fn other_img(&self, name: &str) -> String {
        format!("{}/other/{}.png", self.base, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            content: None,
            output: PathBuf::from("dist"),
            title: "Home".to_string(),
            description: String::new(),
            site_title: None,
            lang: "zh".to_string(),
            mode: ThemeMode::Light,
            threshold: 100.0,
            images: "/images".to_string(),
            no_open: true,
        }
    }

    #[test]
    fn test_defaults_from_parser() {
        // Arrange & Act
        let config = Config::try_parse_from(["pagechrome"]).expect("Defaults should parse");

        // Assert
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.lang, "zh");
        assert_eq!(config.mode, ThemeMode::Light);
        assert_eq!(config.threshold, 100.0);
        assert!(!config.no_open);
    }

    #[test]
    fn test_parse_mode_flag() {
        // Arrange & Act
        let config = Config::try_parse_from(["pagechrome", "--mode", "dark", "--no-open"])
            .expect("Flags should parse");

        // Assert
        assert_eq!(config.mode, ThemeMode::Dark);
        assert!(config.no_open);
    }

    #[test]
    fn test_parse_invalid_mode() {
        let result = Config::try_parse_from(["pagechrome", "--mode", "sepia"]);
        assert!(result.is_err(), "Unknown mode should be rejected");
    }

    #[test]
    fn test_site_title_fallback() {
        // Arrange
        let mut config = config();

        // Act & Assert
        assert_eq!(config.site_title(), "Home");
        config.site_title = Some("My Blog".to_string());
        assert_eq!(config.site_title(), "My Blog");
    }

    #[test]
    fn test_validate_defaults() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_content() {
        // Arrange
        let mut config = config();
        config.content = Some(PathBuf::from("/nonexistent/content.html"));

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_negative_threshold() {
        // Arrange
        let mut config = config();
        config.threshold = -1.0;

        // Act & Assert
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_other_img() {
        assert_eq!(
            ImageResolver::new("/images/").other_img("scroll"),
            "/images/other/scroll.png"
        );
    }
}
