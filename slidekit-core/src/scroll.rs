//! The list-scrolling collaborator.

use serde::Serialize;

/// A smooth horizontal scroll of the list element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollRequest {
    pub left: f32,
    pub top: f32,
}

impl ScrollRequest {
    pub const fn horizontal(left: f32) -> Self {
        Self { left, top: 0.0 }
    }
}

/// Receives scroll commands from a slider. Requests are fire-and-forget:
/// the slider never waits for the animation to finish.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollSink {
    fn smooth_scroll_to(&mut self, request: ScrollRequest);
}

impl<S: ScrollSink + ?Sized> ScrollSink for &mut S {
    fn smooth_scroll_to(&mut self, request: ScrollRequest) {
        (**self).smooth_scroll_to(request);
    }
}

impl<S: ScrollSink + ?Sized> ScrollSink for Box<S> {
    fn smooth_scroll_to(&mut self, request: ScrollRequest) {
        (**self).smooth_scroll_to(request);
    }
}

/// Keeps every request it receives. Used by headless drivers and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingScrollSink {
    requests: Vec<ScrollRequest>,
}

impl RecordingScrollSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    pub fn last(&self) -> Option<ScrollRequest> {
        self.requests.last().copied()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
    }
}

impl ScrollSink for RecordingScrollSink {
    fn smooth_scroll_to(&mut self, request: ScrollRequest) {
        self.requests.push(request);
    }
}
