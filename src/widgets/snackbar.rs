// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Snackbars: transient notifications shown at the bottom of a body.

use super::GLYPH_WIDTH;
use crate::base::Result;
use crate::colors::{Color, SCHEME};
use crate::core::Renderer;
use crate::events::{Point, Rect, Size};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a snackbar stays up when no duration is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Most snackbars held at once, counting the visible one.
pub const MAX_QUEUED: usize = 3;

const HEIGHT: u32 = 48;
const MARGIN: u32 = 16;

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snackbar {
    text: String,
    timeout: Duration,
    shown_at: Option<Instant>,
}

impl Snackbar {
    /// Creates a snackbar with the default timeout.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timeout: DEFAULT_TIMEOUT,
            shown_at: None,
        }
    }

    /// Sets how long the snackbar stays up once shown.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the message.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn expires_at(&self) -> Option<Instant> {
        self.shown_at.map(|at| at + self.timeout)
    }

    /// Draws the snackbar centered at the bottom of a body of `size`.
    pub fn render(&self, renderer: &mut dyn Renderer, size: Size) -> Result<()> {
        let text_width = self.text.chars().count() as u32 * GLYPH_WIDTH;
        let width = (text_width + 2 * MARGIN).min(size.width.saturating_sub(2 * MARGIN));
        let x = (size.width.saturating_sub(width) / 2) as i32;
        let y = size.height.saturating_sub(HEIGHT + MARGIN) as i32;
        let rect = Rect::new(x, y, width, HEIGHT);
        renderer.draw_rect(rect, SCHEME.inverse_surface)?;
        let origin = Point::new(x + MARGIN as i32, rect.center().y);
        renderer.draw_text(&self.text, origin, Color::WHITE)
    }
}

/// A shared queue of snackbars; the front one is visible.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone, Default)]
pub struct Snackbars(Arc<Mutex<VecDeque<Snackbar>>>);

impl Snackbars {
    /// Queues a snackbar with the default timeout.
    pub fn message(&self, text: impl Into<String>) {
        self.show(Snackbar::new(text));
    }

    /// Queues a snackbar.
    ///
    /// When [`MAX_QUEUED`] are already held, the oldest one still waiting
    /// is dropped; the visible one keeps its slot.
    pub fn show(&self, snackbar: Snackbar) {
        tracing::info!(text = %snackbar.text, "snackbar");
        let mut queue = self.0.lock();
        if queue.len() >= MAX_QUEUED {
            let oldest_waiting = usize::from(queue.front().is_some_and(|s| s.shown_at.is_some()));
            if let Some(dropped) = queue.remove(oldest_waiting) {
                tracing::debug!(text = %dropped.text, "snackbar queue full, dropping");
            }
        }
        queue.push_back(snackbar);
    }

    /// Returns the visible snackbar at `now`, retiring expired ones.
    ///
    /// A queued snackbar starts its timeout when it first becomes visible.
    pub fn current(&self, now: Instant) -> Option<Snackbar> {
        let mut queue = self.0.lock();
        loop {
            let front = queue.front_mut()?;
            let shown_at = *front.shown_at.get_or_insert(now);
            if now.saturating_duration_since(shown_at) < front.timeout {
                return Some(front.clone());
            }
            queue.pop_front();
        }
    }

    /// Returns when the visible snackbar expires, if one is visible.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.current(now)?.expires_at()
    }

    /// Returns the number of queued snackbars, including the visible one.
    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbars_show_one_at_a_time() {
        let snackbars = Snackbars::default();
        let start = Instant::now();
        snackbars.show(Snackbar::new("first").with_timeout(Duration::from_secs(2)));
        snackbars.show(Snackbar::new("second").with_timeout(Duration::from_secs(2)));

        assert_eq!(snackbars.current(start).unwrap().text(), "first");
        assert_eq!(
            snackbars.current(start + Duration::from_secs(1)).unwrap().text(),
            "first"
        );
        let later = start + Duration::from_secs(2);
        assert_eq!(snackbars.current(later).unwrap().text(), "second");
        assert_eq!(
            snackbars.next_deadline(later),
            Some(later + Duration::from_secs(2))
        );
        assert!(snackbars.current(later + Duration::from_secs(2)).is_none());
        assert!(snackbars.is_empty());
    }

    #[test]
    fn full_queue_drops_the_oldest_waiting() {
        let snackbars = Snackbars::default();
        let start = Instant::now();
        snackbars.message("Button clicked 1 times");
        assert_eq!(snackbars.current(start).unwrap().text(), "Button clicked 1 times");
        for n in 2..=10 {
            snackbars.message(format!("Button clicked {n} times"));
        }

        assert_eq!(snackbars.len(), MAX_QUEUED);
        assert_eq!(snackbars.current(start).unwrap().text(), "Button clicked 1 times");
        let next = start + DEFAULT_TIMEOUT;
        assert_eq!(snackbars.current(next).unwrap().text(), "Button clicked 9 times");
        let last = next + DEFAULT_TIMEOUT;
        assert_eq!(snackbars.current(last).unwrap().text(), "Button clicked 10 times");
    }

    #[test]
    fn full_queue_without_a_visible_snackbar_drops_the_front() {
        let snackbars = Snackbars::default();
        for n in 1..=4 {
            snackbars.message(format!("note {n}"));
        }
        assert_eq!(snackbars.len(), MAX_QUEUED);
        assert_eq!(snackbars.current(Instant::now()).unwrap().text(), "note 2");
    }

    #[test]
    fn clones_share_the_queue() {
        let snackbars = Snackbars::default();
        let handle = snackbars.clone();
        handle.message("Button clicked");
        assert_eq!(snackbars.len(), 1);
    }
}
