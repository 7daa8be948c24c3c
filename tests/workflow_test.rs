//! Workflow tests for static page output.
//!
//! Writes complete pages into temporary directories and checks the files and
//! markup produced.

use anyhow::Result;
use clap::Parser;
use pagechrome::{Config, ThemeMode, write_site};
use std::fs;
use tempfile::TempDir;

fn config_for(output: &TempDir, args: &[&str]) -> Config {
    let mut argv = vec!["pagechrome", "--no-open", "-o"];
    let output = output.path().to_str().expect("Temp path should be valid UTF8");
    argv.push(output);
    argv.extend_from_slice(args);
    Config::try_parse_from(argv).expect("Arguments should parse")
}

/// Tests default output layout.
#[test]
fn test_write_site_defaults() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;
    let config = config_for(&output, &[]);

    // Act
    let index_path = write_site(&config)?;

    // Assert
    assert_eq!(index_path, output.path().join("index.html"));
    assert!(output.path().join("assets/chrome.css").is_file());
    assert!(output.path().join("assets/chrome.js").is_file());

    let html = fs::read_to_string(&index_path)?;
    assert!(html.contains("<html lang=\"zh\">"));
    assert!(html.contains("class=\"placeholder\""), "Placeholder content");
    assert!(html.contains("data-theme=\"light\""));
    assert!(html.contains("data-threshold=\"100\""));
    assert!(!html.contains("class=\"zoom\""), "Affordance starts hidden");

    Ok(())
}

/// Tests that a content fragment is placed verbatim in the main slot.
#[test]
fn test_write_site_with_content() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;
    let content_path = output.path().join("fragment.html");
    fs::write(&content_path, "<article><h2>Post</h2><p>Hello</p></article>")?;
    let content_arg = content_path.to_str().expect("Temp path should be valid UTF8");
    let config = config_for(
        &output,
        &[
            "--content",
            content_arg,
            "--title",
            "Post",
            "--site-title",
            "My Blog",
            "--description",
            "A post",
            "--mode",
            "dark",
            "--threshold",
            "240",
            "--lang",
            "en",
        ],
    );
    config.validate()?;

    // Act
    let index_path = write_site(&config)?;

    // Assert
    let html = fs::read_to_string(index_path)?;
    assert_eq!(config.mode, ThemeMode::Dark);
    assert!(html.contains("<main class=\"chrome-main\""));
    assert!(html.contains("<article><h2>Post</h2><p>Hello</p></article>"));
    assert!(html.contains("<title>Post</title>"));
    assert!(html.contains("My Blog"));
    assert!(html.contains("content=\"A post\""));
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("data-threshold=\"240\""));
    assert!(html.contains("<html lang=\"en\">"));

    Ok(())
}

/// Tests custom image base path for the affordance icon.
#[test]
fn test_write_site_image_base() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;
    let config = config_for(&output, &["--images", "/static/img/"]);

    // Act
    let html = fs::read_to_string(write_site(&config)?)?;

    // Assert
    assert!(html.contains("/static/img/other/scroll.png"));

    Ok(())
}

/// Tests that a missing content file fails generation.
#[test]
fn test_write_site_missing_content() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;
    let config = config_for(&output, &["--content", "/nonexistent/fragment.html"]);

    // Act
    let result = write_site(&config);

    // Assert
    assert!(config.validate().is_err());
    assert!(result.is_err());
    assert!(
        format!("{:#}", result.unwrap_err()).contains("Failed to read content"),
        "Error should name the failing step"
    );

    Ok(())
}

/// Tests that a zero threshold survives into the page and the palette rules
/// reach the stylesheet the runtime toggle relies on.
#[test]
fn test_write_site_zero_threshold_and_palettes() -> Result<()> {
    // Arrange
    let output = TempDir::new()?;
    let config = config_for(&output, &["--threshold", "0"]);
    config.validate()?;

    // Act
    let html = fs::read_to_string(write_site(&config)?)?;

    // Assert
    assert!(html.contains("data-threshold=\"0\""));
    assert!(!html.contains("--chrome-bg"), "No inline palette on the page");
    let css = fs::read_to_string(output.path().join("assets/chrome.css"))?;
    assert!(css.contains(".theme-root[data-theme=\"light\"]"));
    assert!(css.contains(".theme-root[data-theme=\"dark\"]"));

    Ok(())
}
