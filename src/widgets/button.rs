// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Button widget implementation.

use super::GLYPH_WIDTH;
use crate::base::Result;
use crate::colors::{Color, SCHEME};
use crate::core::{Renderer, Widget, WidgetBase};
use crate::events::{Event, Point, Size};
use crate::styles::Padding;
use parking_lot::RwLock;
use std::sync::Arc;

/// A shared, mutable button label.
///
/// Click handlers hold a clone so they can relabel the button they belong to.
#[derive(Debug, Clone, Default)]
pub struct Label(Arc<RwLock<String>>);

impl Label {
    /// Replaces the label text.
    pub fn set(&self, text: impl Into<String>) {
        *self.0.write() = text.into();
    }

    /// Returns a copy of the label text.
    pub fn get(&self) -> String {
        self.0.read().clone()
    }
}

/// A button widget that can be clicked.
#[derive(Debug)]
pub struct Button {
    base: WidgetBase,
    label: Label,
    button_type: ButtonType,
}

/// Types of buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    /// A filled button with a contrasting background color.
    Filled,
    /// A filled button with a lighter background color.
    Tonal,
    /// An outlined button.
    Outlined,
    /// A text-only button with no border or background.
    Text,
}

impl Button {
    /// Creates a new button with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let label = Label::default();
        label.set(text);
        Self {
            base: WidgetBase::new("button"),
            label,
            button_type: ButtonType::Filled,
        }
    }

    /// Sets the button type.
    pub fn with_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Sets the button text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set(text);
    }

    /// Returns the button text.
    pub fn text(&self) -> String {
        self.label.get()
    }

    /// Returns a handle to the label that stays valid after the button is added to a body.
    pub fn label(&self) -> Label {
        self.label.clone()
    }

    /// Subscribes to primary clicks.
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.base.set_on_click(handler);
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn style(&mut self) {
        let style = self.base.style_mut();
        match self.button_type {
            ButtonType::Filled => {
                style.background = Some(SCHEME.primary);
                style.foreground = Some(SCHEME.on_primary);
                style.padding = Padding::symmetric(24.0, 10.0);
            }
            ButtonType::Tonal => {
                style.background = Some(SCHEME.select_container);
                style.foreground = Some(Color::from_hex("#1967D2").unwrap_or(Color::BLUE));
                style.padding = Padding::symmetric(24.0, 10.0);
            }
            ButtonType::Outlined => {
                style.background = None;
                style.border_color = Some(SCHEME.primary);
                style.border_width = 1.0;
                style.foreground = Some(SCHEME.primary);
                style.padding = Padding::symmetric(24.0, 10.0);
            }
            ButtonType::Text => {
                style.background = None;
                style.foreground = Some(SCHEME.primary);
                style.padding = Padding::uniform(8.0);
            }
        }
    }

    fn size_up(&mut self) {
        let padding = self.base.style().padding;
        let chars = self.label.0.read().chars().count() as u32;
        let width = chars * GLYPH_WIDTH + padding.horizontal() as u32;
        let height = 20 + padding.vertical() as u32;
        self.base.set_actual_size(Size::new(width, height));
    }

    fn render(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let style = self.base.style();
        let bbox = self.base.bbox();

        if style.border_width > 0.0 {
            if let Some(border_color) = style.border_color {
                renderer.draw_rect(bbox, border_color)?;
            }
        }
        if let Some(bg) = style.background {
            renderer.draw_rect(bbox, bg)?;
        }
        if let Some(fg) = style.foreground {
            let text = self.label.get();
            let text_width = text.chars().count() as i32 * GLYPH_WIDTH as i32;
            let center = bbox.center();
            let text_pos = Point::new(center.x - text_width / 2, center.y + 4);
            renderer.draw_text(&text, text_pos, fg)?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        event.is_primary_click() && self.base.call_on_click(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MouseButton;

    #[test]
    fn handler_can_relabel_its_button() {
        let mut button = Button::new("Start Animation");
        let label = button.label();
        button.on_click(move |_| {
            let next = if label.get() == "Start Animation" {
                "Stop Animation"
            } else {
                "Start Animation"
            };
            label.set(next);
        });

        let click = Event::click(Point::zero(), MouseButton::Left);
        assert!(button.handle_event(&click));
        assert_eq!(button.text(), "Stop Animation");
        assert!(button.handle_event(&click));
        assert_eq!(button.text(), "Start Animation");
    }

    #[test]
    fn right_clicks_are_ignored() {
        let mut button = Button::new("Send");
        button.on_click(|_| panic!("should not be called"));
        assert!(!button.handle_event(&Event::click(Point::zero(), MouseButton::Right)));
    }

    #[test]
    fn size_tracks_label_length() {
        let mut button = Button::new("Go");
        button.style();
        button.size_up();
        let short = button.widget_base().actual_size().width;
        button.set_text("Start Animation");
        button.size_up();
        assert!(button.widget_base().actual_size().width > short);
    }
}
