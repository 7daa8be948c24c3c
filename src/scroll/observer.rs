//! Scroll position observer

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::dom::{Host, ListenerId, ScrollSource};

/// Default offset past which the trigger fires.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Callback invoked when the past-threshold signal changes.
pub type SignalWatcher = Rc<dyn Fn(bool)>;

/// Trigger configuration.
///
/// With hysteresis enabled, any upward movement forces the signal off until
/// the next downward scroll. The chrome runs with hysteresis disabled, so the
/// signal follows the threshold comparison alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTriggerOptions {
    pub threshold: f64,
    pub disable_hysteresis: bool,
}

impl Default for ScrollTriggerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            disable_hysteresis: true,
        }
    }
}

impl ScrollTriggerOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Threshold comparison used by the trigger. Strictly greater than.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

struct TriggerState {
    options: ScrollTriggerOptions,
    triggered: Cell<bool>,
    previous: Cell<Option<f64>>,
    watchers: RefCell<Vec<SignalWatcher>>,
}

impl TriggerState {
    fn evaluate(&self, offset: f64) -> bool {
        let previous = self.previous.replace(Some(offset));
        if !self.options.disable_hysteresis && previous.is_some_and(|p| offset < p) {
            return false;
        }
        past_threshold(offset, self.options.threshold)
    }

    fn update(&self, offset: f64) {
        let next = self.evaluate(offset);
        if self.triggered.replace(next) == next {
            return;
        }
        debug!(offset, triggered = next, "scroll trigger changed");

        let watchers: Vec<SignalWatcher> = self.watchers.borrow().clone();
        for watcher in watchers {
            watcher(next);
        }
    }
}

/// Derives a past-threshold signal from a scroll source.
///
/// Without a source the observer is inert: the signal stays `false` until
/// `attach` hands it one.
pub struct ScrollObserver {
    state: Rc<TriggerState>,
    source: Option<(Rc<dyn ScrollSource>, ListenerId)>,
}

impl ScrollObserver {
    /// Creates an observer on `target`, or on the host viewport when `target`
    /// is `None`.
    pub fn new(
        options: ScrollTriggerOptions,
        target: Option<Rc<dyn ScrollSource>>,
        host: &Host,
    ) -> Self {
        let mut observer = Self {
            state: Rc::new(TriggerState {
                options,
                triggered: Cell::new(false),
                previous: Cell::new(None),
                watchers: RefCell::new(Vec::new()),
            }),
            source: None,
        };

        match target.or_else(|| host.viewport.clone()) {
            Some(source) => observer.attach(source),
            None => debug!("no scroll source available, trigger stays inert"),
        }
        observer
    }

    /// Subscribes to `source`, replacing any previous one, and evaluates its
    /// current offset immediately.
    pub fn attach(&mut self, source: Rc<dyn ScrollSource>) {
        self.detach();
        self.state.previous.set(None);

        let state = Rc::clone(&self.state);
        let id = source.subscribe(Rc::new(move |offset: f64| state.update(offset)));
        self.state.update(source.scroll_offset());
        self.source = Some((source, id));
    }

    /// Unsubscribes from the current source. The signal keeps its last value.
    pub fn detach(&mut self) {
        if let Some((source, id)) = self.source.take() {
            source.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&Rc<dyn ScrollSource>> {
        self.source.as_ref().map(|(source, _)| source)
    }

    pub fn past_threshold(&self) -> bool {
        self.state.triggered.get()
    }

    pub fn options(&self) -> ScrollTriggerOptions {
        self.state.options
    }

    /// Registers a watcher called after every signal change.
    pub fn watch(&self, watcher: SignalWatcher) {
        self.state.watchers.borrow_mut().push(watcher);
    }
}

impl Drop for ScrollObserver {
    fn drop(&mut self) {
        self.detach();
    }
}
