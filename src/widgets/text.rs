// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Static text widget.

use super::GLYPH_WIDTH;
use crate::base::Result;
use crate::colors::Color;
use crate::core::{Renderer, Widget, WidgetBase};
use crate::events::{Point, Size};
use crate::styles::TextAlign;

/// Typographic roles for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// Largest headline.
    HeadlineLarge,
    /// Section headline.
    HeadlineSmall,
    /// Medium title.
    TitleMedium,
    /// Regular body text.
    #[default]
    BodyLarge,
    /// Small label text.
    LabelSmall,
}

impl TextType {
    /// Returns the font size in pixels.
    pub fn font_size(self) -> f32 {
        match self {
            TextType::HeadlineLarge => 32.0,
            TextType::HeadlineSmall => 24.0,
            TextType::TitleMedium => 16.0,
            TextType::BodyLarge => 16.0,
            TextType::LabelSmall => 11.0,
        }
    }
}

/// A block of text.
#[derive(Debug)]
pub struct Text {
    base: WidgetBase,
    text: String,
    text_type: TextType,
    align: TextAlign,
}

impl Text {
    /// Creates body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new("text"),
            text: text.into(),
            text_type: TextType::default(),
            align: TextAlign::Start,
        }
    }

    /// Sets the typographic role.
    pub fn with_type(mut self, text_type: TextType) -> Self {
        self.text_type = text_type;
        self
    }

    /// Sets the horizontal alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Returns the text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Text {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn style(&mut self) {
        let style = self.base.style_mut();
        style.foreground = Some(Color::BLACK);
        style.text.size = self.text_type.font_size();
        style.text.align = self.align;
        style.grow_x = true;
    }

    fn size_up(&mut self) {
        let font = self.base.style().text.size;
        let width = self.text.chars().count() as f32 * GLYPH_WIDTH as f32 * font / 16.0;
        self.base
            .set_actual_size(Size::new(width.ceil() as u32, (font * 1.5).ceil() as u32));
    }

    fn render(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let Some(fg) = self.base.style().foreground else {
            return Ok(());
        };
        let bbox = self.base.bbox();
        let text_width = self.base.actual_size().width as i32;
        let x = match self.align {
            TextAlign::Start => bbox.x,
            TextAlign::Center => bbox.center().x - text_width / 2,
            TextAlign::End => bbox.x + bbox.width as i32 - text_width,
        };
        renderer.draw_text(&self.text, Point::new(x, bbox.center().y), fg)
    }
}
