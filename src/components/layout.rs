//! Page layout composition

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::head::head_tags;
use super::header::header;
use super::progress::{progress_percent, scroll_progress};
use super::scroll_top::{affordance, anchor_marker, scroll_top_host};
use super::seo::{SeoMeta, seo_tags};
use super::theme::theme_root;
use crate::config::ImageResolver;
use crate::dom::Host;
use crate::error::Result;
use crate::mount::MountEffects;
use crate::scroll::{ScrollTop, ScrollTriggerOptions};
use crate::theme::{ThemeModeBundle, ThemeModeCoordinator};

/// Inputs the layout receives from data and config collaborators.
#[derive(Debug, Clone)]
pub struct LayoutProps {
    pub site_title: String,
    pub seo: SeoMeta,
    pub images: ImageResolver,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

/// Wraps page content with the shared chrome
///
/// Emits, in order: SEO tags and head injectors, then inside the theming
/// wrapper the progress bar, header, back-to-top anchor, main content slot,
/// footer and the scroll-to-top affordance. The main slot is pulled up by the
/// fixed header's height.
///
/// # Arguments
///
/// * `props`: Site title, SEO metadata, image resolver and assets
/// * `theme`: Mode snapshot shared by every part of this render
/// * `scroll_top`: Affordance whose current state is rendered
/// * `progress`: Scroll progress percentage for the progress bar
/// * `content`: Page body, placed as is
///
/// # Returns
///
/// Complete HTML document
pub fn compose(
    props: &LayoutProps,
    theme: &ThemeModeBundle,
    scroll_top: &ScrollTop,
    progress: f64,
    content: Markup,
) -> Markup {
    let chrome = html! {
        (scroll_progress(progress))
        (header(&props.site_title, theme))
        (anchor_marker())
        main class="chrome-main" style="position: relative; top: -3.5rem" {
            (content)
        }
        (footer(&props.site_title))
        (scroll_top_host(
            scroll_top.observer().options().threshold,
            scroll_top.render(),
            &scroll_top.child(),
        ))
    };

    html! {
        (DOCTYPE)
        html lang=(props.seo.lang) {
            head {
                (seo_tags(&props.seo))
                (head_tags(&props.stylesheets, &props.scripts))
            }
            body {
                (theme_root(theme.mode, chrome))
            }
        }
    }
}

/// Page chrome with its theme relay, affordance and mount hooks.
pub struct Layout {
    props: LayoutProps,
    theme: ThemeModeCoordinator,
    scroll_top: ScrollTop,
    effects: MountEffects,
}

impl Layout {
    /// Builds the chrome for `host`.
    ///
    /// # Errors
    ///
    /// Propagates affordance construction errors.
    pub fn new(
        props: LayoutProps,
        theme: ThemeModeCoordinator,
        host: &Host,
        options: ScrollTriggerOptions,
    ) -> Result<Self> {
        let child = affordance(&props.images.other_img("scroll"));
        let scroll_top = ScrollTop::new(options, None, host, vec![child])?;

        Ok(Self {
            props,
            theme,
            scroll_top,
            effects: MountEffects::new(),
        })
    }

    pub fn props(&self) -> &LayoutProps {
        &self.props
    }

    pub fn theme(&self) -> &ThemeModeCoordinator {
        &self.theme
    }

    pub fn scroll_top(&self) -> &ScrollTop {
        &self.scroll_top
    }

    /// Runs mount-time effects against `host` and attaches the affordance to
    /// its viewport if it has none yet.
    ///
    /// Returns whether the effects ran. Later calls are no-ops.
    pub fn mount(&mut self, host: &Host) -> bool {
        if !self.scroll_top.observer().is_attached()
            && let Some(viewport) = &host.viewport
        {
            self.scroll_top.attach(viewport.clone());
        }

        match &host.document {
            Some(document) => self.effects.mount(document.as_ref()),
            None => false,
        }
    }

    /// Renders the chrome around `content` with one mode snapshot.
    pub fn render(&self, content: Markup) -> Markup {
        let bundle = self.theme.bundle();
        let progress = self
            .scroll_top
            .observer()
            .source()
            .map(|source| progress_percent(source.scroll_offset(), source.max_scroll_offset()))
            .unwrap_or(0.0);

        compose(&self.props, &bundle, &self.scroll_top, progress, content)
    }
}
