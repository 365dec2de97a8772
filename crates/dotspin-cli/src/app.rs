//! Application state and logic

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use dotspin_core::{ColorPalette, LoadingIndicator, View, Visibility};
use ratatui::prelude::*;

use crate::event;
use crate::screens;
use crate::theme::{self, ThemeName};

/// Demo host for a single loading indicator
///
/// Plays the part of the display tree: it attaches and detaches the
/// indicator, changes its visibility, and feeds it frame times measured
/// from `origin`.
pub struct App {
    pub indicator: LoadingIndicator,
    palette: ColorPalette,
    /// Palette entry currently applied, if the color came from the palette
    color_id: Option<String>,
    origin: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(indicator: LoadingIndicator) -> Self {
        Self {
            indicator,
            palette: theme::palette(),
            color_id: None,
            origin: Instant::now(),
            should_quit: false,
        }
    }

    /// Put the indicator on screen
    pub fn start(&mut self) {
        if !self.indicator.is_attached() {
            self.indicator.on_attached_to_window();
        }
    }

    /// Take the indicator off screen, releasing its animation
    pub fn shutdown(&mut self) {
        if self.indicator.is_attached() {
            self.indicator.on_detached_from_window();
        }
    }

    /// Name of the applied color resource
    pub fn color_label(&self) -> Option<&str> {
        self.color_id.as_deref()
    }

    /// Frame time for an instant, relative to app start
    pub fn frame_time(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.origin)
    }

    /// Deliver a frame to the indicator
    pub fn on_tick(&mut self, now: Instant) {
        let frame_time = self.frame_time(now);
        self.indicator.on_frame(frame_time);
    }

    /// Whether the indicator asked for a redraw since the last call
    pub fn take_redraw_request(&self) -> bool {
        self.indicator.take_invalidation()
    }

    pub fn toggle_attached(&mut self) {
        if self.indicator.is_attached() {
            self.indicator.on_detached_from_window();
        } else {
            self.indicator.on_attached_to_window();
        }
        tracing::info!(state = %self.indicator.lifecycle_state(), "Toggled attachment");
    }

    pub fn toggle_visibility(&mut self) {
        let next = if self.indicator.visibility().is_visible() {
            Visibility::Invisible
        } else {
            Visibility::Visible
        };
        self.indicator.on_visibility_changed(next);
        tracing::info!(state = %self.indicator.lifecycle_state(), "Toggled visibility");
    }

    /// Apply the next color resource of the current palette
    pub fn cycle_color(&mut self) {
        let ids: Vec<&str> = self.palette.ids().collect();
        if ids.is_empty() {
            return;
        }
        let next = match self.color_id.as_deref() {
            Some(current) => ids
                .iter()
                .position(|id| *id == current)
                .map_or(0, |i| (i + 1) % ids.len()),
            None => 0,
        };
        let id = ids[next].to_string();
        self.apply_color(id);
    }

    /// Switch to the next theme, re-resolving the applied color resource
    pub fn cycle_theme(&mut self) {
        let next = theme::current_theme_name().next();
        self.set_theme(next);
    }

    pub fn set_theme(&mut self, name: ThemeName) {
        theme::set_theme(name);
        self.palette = theme::palette();
        if let Some(id) = self.color_id.clone() {
            self.apply_color(id);
        }
        tracing::info!(?name, "Theme changed");
    }

    fn apply_color(&mut self, id: String) {
        match self.indicator.set_color_resource(&id, &self.palette) {
            Ok(()) => self.color_id = Some(id),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if event::is_quit(&key) {
            self.should_quit = true;
        } else if event::is_key(&key, 'a') {
            self.toggle_attached();
        } else if event::is_key(&key, 'v') || event::is_space(&key) {
            self.toggle_visibility();
        } else if event::is_key(&key, 'c') {
            self.cycle_color();
        } else if event::is_key(&key, 't') {
            self.cycle_theme();
        }
    }

    /// Render the demo
    pub fn render(&self, frame: &mut Frame) {
        screens::render(frame, self);
    }
}
