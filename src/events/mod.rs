// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Event system for handling user interactions.

use std::fmt;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal pixel offset from the left edge.
    pub x: i32,
    /// Vertical pixel offset from the top edge.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the zero point.
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
}

/// A size in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the zero size.
    pub fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }
}

/// A rectangle in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a point and size.
    pub fn from_point_size(point: Point, size: Size) -> Self {
        Self::new(point.x, point.y, size.width, size.height)
    }

    /// Returns the top-left point of the rectangle.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            self.x + self.width as i32 / 2,
            self.y + self.height as i32 / 2,
        )
    }

    /// Returns true if the point is inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width as i32
            && point.y >= self.y
            && point.y < self.y + self.height as i32
    }
}

/// Types of events that can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A mouse button was pressed.
    MousePress,
    /// A mouse button was pressed and released over the same widget.
    Click,
}

/// An event that occurred in the system.
#[derive(Debug, Clone)]
pub struct Event {
    /// The type of event.
    pub event_type: EventType,
    /// The position of the event.
    pub position: Point,
    /// Additional event data.
    pub data: EventData,
}

/// Additional data associated with an event.
#[derive(Debug, Clone)]
pub enum EventData {
    /// Mouse button information.
    Mouse {
        /// The button involved.
        button: MouseButton,
    },
}

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
    /// The wheel button.
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

impl Event {
    /// Creates a new event.
    pub fn new(event_type: EventType, position: Point, data: EventData) -> Self {
        Self {
            event_type,
            position,
            data,
        }
    }

    /// Creates a click event.
    pub fn click(position: Point, button: MouseButton) -> Self {
        Self::new(EventType::Click, position, EventData::Mouse { button })
    }

    /// Creates a mouse press event.
    pub fn mouse_press(position: Point, button: MouseButton) -> Self {
        Self::new(EventType::MousePress, position, EventData::Mouse { button })
    }

    /// Returns true for a click made with the primary (left) button.
    pub fn is_primary_click(&self) -> bool {
        let EventData::Mouse { button } = self.data;
        self.event_type == EventType::Click && button == MouseButton::Left
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::MousePress => write!(f, "MousePress"),
            EventType::Click => write!(f, "Click"),
        }
    }
}
