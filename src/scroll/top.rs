//! Floating "back to top" affordance

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use maud::Markup;

use super::anchor::{ActivationEvent, AnchorScroller};
use super::animator::{TransitionPhase, VisibilityAnimator};
use super::observer::{ScrollObserver, ScrollTriggerOptions};
use crate::dom::{Host, ScrollSource};
use crate::error::Result;

/// Observer, animator and scroller wired into one affordance.
///
/// Every signal change reaches the animator synchronously, before any frame
/// of the transition it triggers is advanced.
pub struct ScrollTop {
    observer: ScrollObserver,
    animator: Rc<RefCell<VisibilityAnimator>>,
    scroller: AnchorScroller,
}

impl ScrollTop {
    /// Builds the affordance around exactly one child element.
    ///
    /// # Arguments
    ///
    /// * `options`: Trigger threshold and hysteresis setting
    /// * `target`: Scroll source to observe (`None` for the host viewport)
    /// * `host`: Ambient viewport and document
    /// * `children`: Affordance content, exactly one element
    ///
    /// # Errors
    ///
    /// Returns `ChromeError::ChildCount` when `children` does not hold exactly
    /// one element.
    pub fn new(
        options: ScrollTriggerOptions,
        target: Option<Rc<dyn ScrollSource>>,
        host: &Host,
        children: Vec<Markup>,
    ) -> Result<Self> {
        let animator = Rc::new(RefCell::new(VisibilityAnimator::new(children)?));
        let observer = ScrollObserver::new(options, target, host);
        animator.borrow_mut().set_in(observer.past_threshold());

        let sink = Rc::clone(&animator);
        observer.watch(Rc::new(move |visible: bool| sink.borrow_mut().set_in(visible)));

        Ok(Self {
            observer,
            animator,
            scroller: AnchorScroller::new(host),
        })
    }

    /// Attaches a scroll source that became available after construction.
    pub fn attach(&mut self, source: Rc<dyn ScrollSource>) {
        self.observer.attach(source);
    }

    pub fn observer(&self) -> &ScrollObserver {
        &self.observer
    }

    pub fn is_triggered(&self) -> bool {
        self.observer.past_threshold()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.animator.borrow().phase()
    }

    pub fn is_mounted(&self) -> bool {
        self.animator.borrow().is_mounted()
    }

    pub fn advance(&self, dt: Duration) {
        self.animator.borrow_mut().advance(dt);
    }

    pub fn settle(&self) {
        self.animator.borrow_mut().settle();
    }

    /// Current render of the affordance, `None` while hidden.
    pub fn render(&self) -> Option<Markup> {
        self.animator.borrow().render()
    }

    /// The affordance content without the transition wrapper.
    pub fn child(&self) -> Markup {
        self.animator.borrow().child().clone()
    }

    pub fn activate(&self, event: &ActivationEvent) -> bool {
        self.scroller.activate(event)
    }
}
