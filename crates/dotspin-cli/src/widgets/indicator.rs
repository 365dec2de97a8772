//! Braille rendering of the loading indicator

use dotspin_core::{DeviceCircle, LoadingIndicator, RecordingCanvas, Rect as CoreRect, View};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};

use crate::theme;

/// Braille dots per terminal cell, horizontally and vertically
const DOTS_PER_CELL: (f64, f64) = (2.0, 4.0);

/// A solid disk, sampled at the braille grid spacing
#[derive(Debug, Clone, PartialEq)]
struct FilledCircle {
    x: f64,
    y: f64,
    radius: f64,
    color: Color,
    step_x: f64,
    step_y: f64,
    /// Layer clip in device coordinates, where y grows downward
    clip: Option<CoreRect>,
    /// Canvas height, for flipping back to device y
    height: f64,
}

impl FilledCircle {
    fn paint_at(&self, painter: &mut Painter, x: f64, y: f64) {
        if let Some(clip) = self.clip {
            if !clip.contains(x as f32, (self.height - y) as f32) {
                return;
            }
        }
        if let Some((px, py)) = painter.get_point(x, y) {
            painter.paint(px, py, self.color);
        }
    }
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        if self.step_x > 0.0 && self.step_y > 0.0 {
            let r2 = self.radius * self.radius;
            let mut y = self.y - self.radius;
            while y <= self.y + self.radius {
                let mut x = self.x - self.radius;
                while x <= self.x + self.radius {
                    let (dx, dy) = (x - self.x, y - self.y);
                    if dx * dx + dy * dy <= r2 {
                        self.paint_at(painter, x, y);
                    }
                    x += self.step_x;
                }
                y += self.step_y;
            }
        }

        // Dots smaller than one braille cell still show up
        self.paint_at(painter, self.x, self.y);
    }
}

/// Draws a [`LoadingIndicator`] into a square region of the terminal
///
/// Nothing is painted unless the indicator is attached and visible.
pub struct IndicatorWidget<'a> {
    indicator: &'a LoadingIndicator,
}

impl<'a> IndicatorWidget<'a> {
    pub fn new(indicator: &'a LoadingIndicator) -> Self {
        Self { indicator }
    }
}

/// Largest centered region of `area` that shows up square on screen
///
/// Terminal cells are about twice as tall as wide, so a square is two
/// columns per row.
pub fn fit_square(area: Rect) -> Rect {
    let rows = area.height.min(area.width / 2);
    let cols = rows * 2;
    Rect {
        x: area.x + (area.width - cols) / 2,
        y: area.y + (area.height - rows) / 2,
        width: cols,
        height: rows,
    }
}

/// Map a device circle into canvas space, where y grows upward
fn to_shape(circle: &DeviceCircle, width: f64, height: f64, area: Rect) -> FilledCircle {
    FilledCircle {
        x: f64::from(circle.center.x),
        y: height - f64::from(circle.center.y),
        radius: f64::from(circle.radius),
        color: theme::to_tui_color(circle.color),
        step_x: width / (f64::from(area.width) * DOTS_PER_CELL.0),
        step_y: height / (f64::from(area.height) * DOTS_PER_CELL.1),
        clip: circle.clip,
        height,
    }
}

impl Widget for IndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.indicator.is_shown() {
            return;
        }

        let square = fit_square(area);
        let width = f64::from(self.indicator.width());
        let height = f64::from(self.indicator.height());
        if square.is_empty() || width <= 0.0 || height <= 0.0 {
            return;
        }

        let mut recording = RecordingCanvas::new();
        self.indicator.on_draw(&mut recording);
        let dots: Vec<FilledCircle> = recording
            .circles()
            .filter(|c| c.color.a > 0 && c.is_visible())
            .map(|c| to_shape(c, width, height, square))
            .collect();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for dot in &dots {
                    ctx.draw(dot);
                }
            })
            .render(square, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count()
    }

    #[test]
    fn test_fit_square_centers_region() {
        let square = fit_square(Rect::new(0, 0, 40, 10));
        assert_eq!(square, Rect::new(10, 0, 20, 10));

        let square = fit_square(Rect::new(2, 3, 10, 30));
        assert_eq!(square, Rect::new(2, 15, 10, 5));
    }

    #[test]
    fn test_detached_indicator_paints_nothing() {
        let indicator = LoadingIndicator::default();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        IndicatorWidget::new(&indicator).render(area, &mut buf);
        assert_eq!(painted_cells(&buf), 0);
    }

    #[test]
    fn test_shown_indicator_paints_braille() {
        let mut indicator = LoadingIndicator::default();
        indicator.on_attached_to_window();
        indicator.on_frame(Duration::ZERO);

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        IndicatorWidget::new(&indicator).render(area, &mut buf);

        assert!(painted_cells(&buf) > 0);
        assert!(buf
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .all(|cell| cell.symbol().chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c))));
    }

    fn render_shape(shape: FilledCircle) -> Buffer {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 20.0])
            .y_bounds([0.0, 20.0])
            .paint(|ctx| ctx.draw(&shape))
            .render(area, &mut buf);
        buf
    }

    fn disk(clip: Option<CoreRect>) -> FilledCircle {
        FilledCircle {
            x: 10.0,
            y: 10.0,
            radius: 6.0,
            color: Color::White,
            step_x: 1.0,
            step_y: 1.0,
            clip,
            height: 20.0,
        }
    }

    #[test]
    fn test_clip_limits_painted_area() {
        let whole = painted_cells(&render_shape(disk(None)));
        assert!(whole > 0);

        let left_half = CoreRect::new(0.0, 0.0, 9.0, 20.0);
        let buf = render_shape(disk(Some(left_half)));
        let clipped = painted_cells(&buf);
        assert!(clipped > 0 && clipped < whole);
        for x in 5..10 {
            for y in 0..5 {
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }

        let outside = CoreRect::new(30.0, 0.0, 40.0, 20.0);
        assert_eq!(painted_cells(&render_shape(disk(Some(outside)))), 0);
    }
}
