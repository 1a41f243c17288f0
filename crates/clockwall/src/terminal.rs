//! Terminal surface: renderer and frame pacer backed by ratatui/crossterm.

use std::fmt::Display;
use std::io;
use std::time::{Duration, Instant};

use clockwall_core::{FramePacer, InitError, Pace, Point, RenderError, Renderer, Rgba};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::canvas::DisplayList;

/// Renderer that draws into the terminal's alternate screen.
///
/// Creating it takes over the terminal; dropping it gives the terminal back.
pub struct TerminalRenderer {
    terminal: DefaultTerminal,
    list: DisplayList,
    last_error: String,
}

impl TerminalRenderer {
    /// Take over the terminal with a surface of `width` x `height` pixels.
    pub fn create(width: u32, height: u32) -> Result<Self, InitError> {
        let list = DisplayList::new(width, height)?;
        let terminal = take_over(ratatui::try_init, ratatui::restore)?;
        info!(width, height, "terminal surface created");
        Ok(Self {
            terminal,
            list,
            last_error: String::new(),
        })
    }
}

/// Run `init`, undoing any partial terminal setup with `restore` if it fails.
fn take_over<T, E: Display>(
    init: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce(),
) -> Result<T, InitError> {
    init().map_err(|err| {
        restore();
        InitError::Surface(err.to_string())
    })
}

impl Renderer for TerminalRenderer {
    fn set_draw_color(&mut self, color: Rgba) {
        self.list.set_draw_color(color);
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        self.list.clear();
        Ok(())
    }

    fn draw_aa_circle(&mut self, center: Point, radius: i32, color: Rgba) -> bool {
        match self.list.circle(center, radius, color) {
            Ok(()) => true,
            Err(message) => {
                self.last_error = message;
                false
            }
        }
    }

    fn draw_aa_line(&mut self, from: Point, to: Point, color: Rgba) -> bool {
        self.list.line(from, to, color);
        true
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let list = &self.list;
        match self
            .terminal
            .draw(|frame| frame.render_widget(list, frame.area()))
        {
            Ok(_) => Ok(()),
            Err(err) => {
                self.last_error = err.to_string();
                Err(RenderError::Present(err.to_string()))
            }
        }
    }

    fn last_error(&self) -> String {
        self.last_error.clone()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("terminal surface released");
    }
}

/// Source of terminal input events.
pub trait EventSource {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process's own terminal, read through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Paces frames by polling terminal events, stopping on the close keys.
///
/// Every other event is consumed and the wait resumes, so a wait lasts the
/// full delay unless a close key arrives.
#[derive(Debug, Default)]
pub struct TerminalPacer<E = CrosstermEvents> {
    events: E,
}

impl<E: EventSource> TerminalPacer<E> {
    pub fn new(events: E) -> Self {
        Self { events }
    }
}

impl<E: EventSource> FramePacer for TerminalPacer<E> {
    fn wait(&mut self, delay: Duration) -> Result<Pace, RenderError> {
        let events = |err: io::Error| RenderError::Events(err.to_string());
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if self.events.poll(remaining).map_err(events)? {
                if let Event::Key(key) = self.events.read().map_err(events)?
                    && key.kind == KeyEventKind::Press
                    && is_close_request(key)
                {
                    return Ok(Pace::Stop);
                }
            }
            if Instant::now() >= deadline {
                return Ok(Pace::Continue);
            }
        }
    }
}

/// Whether `key` asks to close the surface.
pub fn is_close_request(key: KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
    )
}
