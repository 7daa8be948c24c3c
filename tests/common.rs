//! Shared test utilities for integration tests.
//!
//! Provides an in-memory browser host with a mounted back-to-top anchor and
//! default layout inputs used across multiple test files.

#![allow(dead_code)]

use pagechrome::dom::{Element, Host, MemoryDocument, Viewport};
use pagechrome::{BACK_TO_TOP_ANCHOR, ImageResolver, LayoutProps, SeoMeta};
use std::rc::Rc;

/// Viewport height used by test hosts.
pub const CLIENT_HEIGHT: f64 = 800.0;

/// In-memory browser host.
pub struct TestHost {
    pub viewport: Rc<Viewport>,
    pub document: Rc<MemoryDocument>,
    pub host: Host,
}

/// Creates a host with a page of `scroll_height` and the anchor at the top.
pub fn browser_host(scroll_height: f64) -> TestHost {
    let viewport = Rc::new(Viewport::new(CLIENT_HEIGHT, scroll_height));
    let document = Rc::new(MemoryDocument::new(viewport.clone()));
    document.insert(Element::new(BACK_TO_TOP_ANCHOR, 0.0, 64.0));
    let host = Host::from_document(document.clone());

    TestHost {
        viewport,
        document,
        host,
    }
}

/// Layout inputs for a simple page.
pub fn props() -> LayoutProps {
    LayoutProps {
        site_title: "Test Site".to_string(),
        seo: SeoMeta {
            title: "Test Page".to_string(),
            description: "Integration test page".to_string(),
            lang: "zh".to_string(),
        },
        images: ImageResolver::new("/images"),
        stylesheets: vec!["assets/chrome.css".to_string()],
        scripts: vec!["assets/chrome.js".to_string()],
    }
}
