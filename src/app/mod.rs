// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Application management and lifecycle.
//!
//! [`App::run_main_window`] shows a [`Body`] in a native window and
//! returns when the window is closed. Frames are drawn on the CPU into
//! a pixel buffer and presented with `softbuffer`.

use crate::base::{Error, Result};
use crate::colors::Color;
use crate::core::{Body, Renderer};
use crate::events::{Event, MouseButton, Point, Rect, Size};
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A renderer that draws into an `0xAARRGGBB` pixel buffer.
#[derive(Debug, Default)]
pub struct PixelRenderer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelRenderer {
    /// Creates a renderer with a buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    /// Resizes the buffer, discarding its contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height) as usize];
    }

    /// Returns the pixels, row by row.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[(y * self.width + x) as usize])
    }
}

impl Renderer for PixelRenderer {
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        let x0 = rect.x.clamp(0, self.width as i32) as u32;
        let y0 = rect.y.clamp(0, self.height as i32) as u32;
        let x1 = (rect.x + rect.width as i32).clamp(0, self.width as i32) as u32;
        let y1 = (rect.y + rect.height as i32).clamp(0, self.height as i32) as u32;
        for y in y0..y1 {
            let row = (y * self.width) as usize;
            for pixel in &mut self.pixels[row + x0 as usize..row + x1 as usize] {
                *pixel = color.blend_over(*pixel);
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, _color: Color) -> Result<()> {
        // No glyph rasterizer yet; text draws are dropped.
        tracing::trace!(text, ?position, "skipping text draw");
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.pixels.fill(color.as_argb());
        Ok(())
    }
}

/// A running window showing a body.
pub struct App {
    body: Body,
    window: Option<Arc<Window>>,
    // Kept alive for as long as the surface.
    _context: Option<Context<Arc<Window>>>,
    surface: Option<Surface<Arc<Window>, Arc<Window>>>,
    renderer: PixelRenderer,
    size: Size,
    cursor: Point,
    pressed: Option<MouseButton>,
    error: Option<Error>,
}

impl App {
    /// Creates an app for `body`; no window is opened until the event loop runs.
    pub fn new(body: Body) -> Self {
        Self {
            body,
            window: None,
            _context: None,
            surface: None,
            renderer: PixelRenderer::default(),
            size: Size::new(800, 600),
            cursor: Point::zero(),
            pressed: None,
            error: None,
        }
    }

    /// Shows `body` in a window and blocks until the window is closed.
    pub fn run_main_window(body: Body) -> Result<()> {
        let event_loop = EventLoop::new().map_err(|e| Error::Rendering(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);
        let mut app = Self::new(body);
        event_loop
            .run_app(&mut app)
            .map_err(|e| Error::Rendering(e.to_string()))?;
        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns the body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Handles an event and relays out, since handlers may change widget sizes.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let handled = self.body.handle_event(event);
        if handled {
            self.body.layout(self.size);
        }
        handled
    }

    /// Renders the body into the pixel buffer.
    pub fn render(&mut self) -> Result<()> {
        self.body.render(&mut self.renderer, Instant::now())
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.body.title())
            .with_inner_size(LogicalSize::new(self.size.width, self.size.height));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| Error::Rendering(e.to_string()))?,
        );
        let context =
            Context::new(window.clone()).map_err(|e| Error::Rendering(e.to_string()))?;
        let surface =
            Surface::new(&context, window.clone()).map_err(|e| Error::Rendering(e.to_string()))?;

        let redraw_target = window.clone();
        self.body
            .redraw_signal()
            .set_hook(move || redraw_target.request_redraw());

        let inner = window.inner_size();
        self.window = Some(window.clone());
        self._context = Some(context);
        self.surface = Some(surface);
        self.resize(Size::new(inner.width, inner.height))?;
        window.request_redraw();
        Ok(())
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        if let Some(surface) = self.surface.as_mut() {
            surface
                .resize(width, height)
                .map_err(|e| Error::Rendering(e.to_string()))?;
        }
        self.size = size;
        self.renderer.resize(size.width, size.height);
        self.body.layout(size);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.render()?;
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| Error::Rendering(e.to_string()))?;
        if buffer.len() == self.renderer.pixels().len() {
            buffer.copy_from_slice(self.renderer.pixels());
        }
        buffer.present().map_err(|e| Error::Rendering(e.to_string()))
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        tracing::error!(%err, "closing window");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            self.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.open(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.resize(Size::new(size.width, size.height)) {
                    self.fail(event_loop, err);
                }
                self.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_button(button);
                match state {
                    ElementState::Pressed => self.pressed = Some(button),
                    ElementState::Released => {
                        if self.pressed.take() == Some(button)
                            && self.handle_event(&Event::click(self.cursor, button))
                        {
                            self.request_redraw();
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.present() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.body.next_deadline(Instant::now()) {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Button;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn draw_rect_clips_to_buffer() {
        let mut renderer = PixelRenderer::new(4, 4);
        renderer.clear(Color::BLACK).unwrap();
        renderer.draw_rect(Rect::new(-2, 2, 4, 10), Color::RED).unwrap();

        assert_eq!(renderer.pixel(0, 2), Some(Color::RED.as_argb()));
        assert_eq!(renderer.pixel(1, 3), Some(Color::RED.as_argb()));
        assert_eq!(renderer.pixel(2, 2), Some(Color::BLACK.as_argb()));
        assert_eq!(renderer.pixel(0, 1), Some(Color::BLACK.as_argb()));
        assert_eq!(renderer.pixel(4, 0), None);
    }

    #[test]
    fn translucent_rects_blend() {
        let mut renderer = PixelRenderer::new(1, 1);
        renderer.clear(Color::WHITE).unwrap();
        renderer
            .draw_rect(Rect::new(0, 0, 1, 1), Color::rgba(255, 0, 255, 150))
            .unwrap();
        let pixel = renderer.pixel(0, 0).unwrap();
        assert_eq!((pixel >> 16) & 0xFF, 255);
        assert!((pixel >> 8) & 0xFF < 255);
    }

    #[test]
    fn app_relays_out_after_handled_clicks() {
        let mut body = Body::new("test");
        let clicks = Arc::new(AtomicUsize::new(0));
        let mut button = Button::new("Go");
        let label = button.label();
        let counter = clicks.clone();
        button.on_click(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            label.set("A much longer label");
        });
        body.add(button);

        let mut app = App::new(body);
        app.body.layout(app.size);
        let before = app.body().child(0).unwrap().widget_base().bbox();
        assert!(app.handle_event(&Event::click(before.center(), MouseButton::Left)));
        let after = app.body().child(0).unwrap().widget_base().bbox();

        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert!(after.width > before.width);
        app.renderer.resize(800, 600);
        app.render().unwrap();
    }
}
