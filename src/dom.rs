//! Host document and viewport boundary
//!
//! Chrome components never reach for ambient browser state. Everything they
//! read or mutate goes through the traits in this module, passed in at
//! construction. `Viewport` and `MemoryDocument` are the in-memory host used
//! when rendering outside a browser and in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

/// Callback invoked with the new offset after every scroll.
pub type ScrollListener = Rc<dyn Fn(f64)>;

/// Handle returned by `ScrollSource::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Anything that scrolls vertically and reports it.
pub trait ScrollSource {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Largest reachable offset.
    fn max_scroll_offset(&self) -> f64;

    /// Registers a listener notified synchronously on every offset change.
    fn subscribe(&self, listener: ScrollListener) -> ListenerId;

    /// Removes a listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}

/// Scroll animation behavior for `scroll_into_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Vertical alignment of the target element after scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Laid out element, addressed by its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Element {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Node living in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadNode {
    pub tag: String,
    pub id: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl HeadNode {
    /// Creates a script node loading `src`.
    pub fn script(src: &str) -> Self {
        Self {
            tag: "script".to_string(),
            id: None,
            attributes: vec![
                ("type".to_string(), "text/javascript".to_string()),
                ("src".to_string(), src.to_string()),
            ],
        }
    }

    /// Creates a style node with the given id.
    pub fn style(id: &str) -> Self {
        Self {
            tag: "style".to_string(),
            id: Some(id.to_string()),
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Document operations the chrome needs.
pub trait Document {
    /// The document's scrolling viewport, if it has one.
    fn scroll_source(&self) -> Option<Rc<dyn ScrollSource>>;

    fn query_by_id(&self, id: &str) -> Option<Element>;

    /// Scrolls the viewport so `element` lands where `options.block` asks.
    /// Smooth scrolls return immediately and complete over later frames.
    fn scroll_into_view(&self, element: &Element, options: ScrollIntoViewOptions);

    /// Removes the node with `id` from head or body. Returns whether a node
    /// was removed.
    fn remove_by_id(&self, id: &str) -> bool;

    fn append_head(&self, node: HeadNode);
}

/// Duration of a smooth scroll in the in-memory host.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: f64,
    to: f64,
    elapsed: Duration,
}

/// In-memory scrolling viewport.
pub struct Viewport {
    offset: Cell<f64>,
    client_height: f64,
    max_offset: f64,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    animation: Cell<Option<SmoothScroll>>,
}

impl Viewport {
    /// Creates a viewport showing `client_height` of a page `scroll_height` tall.
    pub fn new(client_height: f64, scroll_height: f64) -> Self {
        Self {
            offset: Cell::new(0.0),
            client_height,
            max_offset: (scroll_height - client_height).max(0.0),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            animation: Cell::new(None),
        }
    }

    pub fn client_height(&self) -> f64 {
        self.client_height
    }

    /// Jumps to `offset`, cancelling any smooth scroll in flight.
    pub fn scroll_to(&self, offset: f64) {
        self.animation.set(None);
        self.set_offset(offset);
    }

    /// Starts a smooth scroll toward `offset`, replacing any scroll in flight.
    pub fn smooth_scroll_to(&self, offset: f64) {
        self.animation.set(Some(SmoothScroll {
            from: self.offset.get(),
            to: offset.clamp(0.0, self.max_offset),
            elapsed: Duration::ZERO,
        }));
    }

    pub fn is_animating(&self) -> bool {
        self.animation.get().is_some()
    }

    /// Advances an in-flight smooth scroll by one frame.
    pub fn advance(&self, dt: Duration) {
        let Some(mut anim) = self.animation.get() else {
            return;
        };

        anim.elapsed += dt;
        let t = (anim.elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64()).min(1.0);
        let next = anim.from + (anim.to - anim.from) * ease_in_out_cubic(t);

        if t >= 1.0 {
            self.animation.set(None);
        } else {
            self.animation.set(Some(anim));
        }
        self.set_offset(next);
    }

    /// Runs any smooth scroll in flight to completion.
    pub fn finish_animation(&self) {
        while self.is_animating() {
            self.advance(Duration::from_millis(16));
        }
    }

    /// Offset that aligns `element` according to `block`.
    pub fn target_offset(&self, element: &Element, block: ScrollBlock) -> f64 {
        let current = self.offset.get();
        let target = match block {
            ScrollBlock::Start => element.top,
            ScrollBlock::Center => element.top + element.height / 2.0 - self.client_height / 2.0,
            ScrollBlock::End => element.top + element.height - self.client_height,
            ScrollBlock::Nearest => {
                let bottom = element.top + element.height;
                if element.top >= current && bottom <= current + self.client_height {
                    current
                } else if element.top < current {
                    element.top
                } else {
                    bottom - self.client_height
                }
            }
        };
        target.clamp(0.0, self.max_offset)
    }

    fn set_offset(&self, offset: f64) {
        let clamped = offset.clamp(0.0, self.max_offset);
        if clamped == self.offset.get() {
            return;
        }
        self.offset.set(clamped);

        // Listeners may subscribe or scroll again while being notified
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(clamped);
        }
    }
}

impl ScrollSource for Viewport {
    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn max_scroll_offset(&self) -> f64 {
        self.max_offset
    }

    fn subscribe(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

/// In-memory document with a flat element table and a head node list.
pub struct MemoryDocument {
    viewport: Rc<Viewport>,
    elements: RefCell<Vec<Element>>,
    head: RefCell<Vec<HeadNode>>,
}

impl MemoryDocument {
    pub fn new(viewport: Rc<Viewport>) -> Self {
        Self {
            viewport,
            elements: RefCell::new(Vec::new()),
            head: RefCell::new(Vec::new()),
        }
    }

    pub fn viewport(&self) -> &Rc<Viewport> {
        &self.viewport
    }

    pub fn insert(&self, element: Element) {
        self.elements.borrow_mut().push(element);
    }

    pub fn head_nodes(&self) -> Vec<HeadNode> {
        self.head.borrow().clone()
    }
}

impl Document for MemoryDocument {
    fn scroll_source(&self) -> Option<Rc<dyn ScrollSource>> {
        Some(Rc::clone(&self.viewport) as Rc<dyn ScrollSource>)
    }

    fn query_by_id(&self, id: &str) -> Option<Element> {
        self.elements.borrow().iter().find(|e| e.id == id).cloned()
    }

    fn scroll_into_view(&self, element: &Element, options: ScrollIntoViewOptions) {
        let target = self.viewport.target_offset(element, options.block);
        debug!(id = %element.id, target, ?options, "scroll into view");
        match options.behavior {
            ScrollBehavior::Smooth => self.viewport.smooth_scroll_to(target),
            ScrollBehavior::Auto => self.viewport.scroll_to(target),
        }
    }

    fn remove_by_id(&self, id: &str) -> bool {
        let mut head = self.head.borrow_mut();
        if let Some(pos) = head.iter().position(|n| n.id.as_deref() == Some(id)) {
            head.remove(pos);
            return true;
        }
        drop(head);

        let mut elements = self.elements.borrow_mut();
        if let Some(pos) = elements.iter().position(|e| e.id == id) {
            elements.remove(pos);
            return true;
        }
        false
    }

    fn append_head(&self, node: HeadNode) {
        self.head.borrow_mut().push(node);
    }
}

/// Ambient environment the chrome runs in.
///
/// Outside a browser both fields are `None` and every component that needs
/// them stays inert.
#[derive(Clone, Default)]
pub struct Host {
    pub viewport: Option<Rc<dyn ScrollSource>>,
    pub document: Option<Rc<dyn Document>>,
}

impl Host {
    /// Host with no viewport and no document.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Host backed by `document` and its viewport.
    pub fn from_document(document: Rc<dyn Document>) -> Self {
        Self {
            viewport: document.scroll_source(),
            document: Some(document),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.viewport.is_none() && self.document.is_none()
    }
}

/// Cubic ease-in-out on [0, 1].
fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_notifies_listeners_on_change() {
        // Arrange
        let viewport = Viewport::new(800.0, 3000.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        viewport.subscribe(Rc::new(move |offset: f64| sink.borrow_mut().push(offset)));

        // Act
        viewport.scroll_to(150.0);
        viewport.scroll_to(150.0);
        viewport.scroll_to(50.0);

        // Assert
        assert_eq!(
            *seen.borrow(),
            vec![150.0, 50.0],
            "Unchanged offsets should not notify"
        );
    }

    #[test]
    fn test_viewport_clamps_offset() {
        // Arrange
        let viewport = Viewport::new(800.0, 1000.0);

        // Act & Assert
        viewport.scroll_to(5000.0);
        assert_eq!(viewport.scroll_offset(), 200.0);
        viewport.scroll_to(-10.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_viewport_unsubscribe() {
        // Arrange
        let viewport = Viewport::new(800.0, 3000.0);
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let id = viewport.subscribe(Rc::new(move |_: f64| sink.set(sink.get() + 1)));

        // Act
        viewport.scroll_to(10.0);
        viewport.unsubscribe(id);
        viewport.scroll_to(20.0);

        // Assert
        assert_eq!(count.get(), 1, "Listener should stop after unsubscribe");
    }

    #[test]
    fn test_smooth_scroll_moves_over_frames() {
        // Arrange
        let viewport = Viewport::new(800.0, 3000.0);
        viewport.scroll_to(1000.0);

        // Act
        viewport.smooth_scroll_to(0.0);
        let before = viewport.scroll_offset();
        viewport.advance(Duration::from_millis(100));
        let midway = viewport.scroll_offset();
        viewport.finish_animation();

        // Assert
        assert_eq!(before, 1000.0, "Smooth scroll should not jump immediately");
        assert!(midway < 1000.0 && midway > 0.0, "Got {}", midway);
        assert_eq!(viewport.scroll_offset(), 0.0);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_target_offset_center() {
        // Arrange
        let viewport = Viewport::new(800.0, 3000.0);
        let element = Element::new("anchor", 1000.0, 64.0);

        // Act
        let target = viewport.target_offset(&element, ScrollBlock::Center);

        // Assert
        assert_eq!(target, 1000.0 + 32.0 - 400.0);
    }

    #[test]
    fn test_target_offset_center_clamps_at_top() {
        // Arrange
        let viewport = Viewport::new(800.0, 3000.0);
        let element = Element::new("anchor", 0.0, 64.0);

        // Act & Assert
        assert_eq!(viewport.target_offset(&element, ScrollBlock::Center), 0.0);
    }

    #[test]
    fn test_target_offset_nearest_keeps_visible_element() {
        // Arrange
        let viewport = Viewport::new(800.0, 3000.0);
        viewport.scroll_to(500.0);
        let element = Element::new("visible", 600.0, 50.0);

        // Act & Assert
        assert_eq!(viewport.target_offset(&element, ScrollBlock::Nearest), 500.0);
    }

    #[test]
    fn test_memory_document_remove_by_id() {
        // Arrange
        let document = MemoryDocument::new(Rc::new(Viewport::new(800.0, 3000.0)));
        document.append_head(HeadNode::style("jss-server-side"));
        document.insert(Element::new("main", 0.0, 100.0));

        // Act & Assert
        assert!(document.remove_by_id("jss-server-side"));
        assert!(document.remove_by_id("main"));
        assert!(!document.remove_by_id("missing"));
        assert!(document.head_nodes().is_empty());
        assert!(document.query_by_id("main").is_none());
    }

    #[test]
    fn test_host_detached() {
        assert!(Host::detached().is_detached());
    }

    #[test]
    fn test_ease_in_out_cubic_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }
}
