//! GUI mode for dotspin (requires `gui` feature)

#[cfg(feature = "gui")]
use std::time::Duration;

#[cfg(feature = "gui")]
use dotspin_core::Canvas as _;
#[cfg(feature = "gui")]
use dotspin_core::{Config, LoadingIndicator, RecordingCanvas, View, Visibility};
#[cfg(feature = "gui")]
use iced::mouse;
#[cfg(feature = "gui")]
use iced::time::Instant;
#[cfg(feature = "gui")]
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
#[cfg(feature = "gui")]
use iced::widget::{button, center, column, row, text};
#[cfg(feature = "gui")]
use iced::{window, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme};

/// Run the GUI application
#[cfg(feature = "gui")]
pub fn run() -> iced::Result {
    iced::application("dotspin", DotspinApp::update, DotspinApp::view)
        .subscription(DotspinApp::subscription)
        .run()
}

/// Main application state
#[cfg(feature = "gui")]
struct DotspinApp {
    indicator: LoadingIndicator,
    origin: Option<Instant>,
}

/// Application messages
#[cfg(feature = "gui")]
#[derive(Debug, Clone)]
enum Message {
    Frame(Instant),
    ToggleAttached,
    ToggleVisibility,
}

#[cfg(feature = "gui")]
impl Default for DotspinApp {
    fn default() -> Self {
        let config = Config::load();
        let mut indicator = match config.indicator_config() {
            Ok(indicator_config) => LoadingIndicator::new(indicator_config),
            Err(e) => {
                tracing::warn!("Invalid indicator config, using defaults: {}", e);
                LoadingIndicator::default()
            }
        };
        indicator.on_attached_to_window();
        Self {
            indicator,
            origin: None,
        }
    }
}

#[cfg(feature = "gui")]
impl DotspinApp {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Frame(now) => {
                let origin = *self.origin.get_or_insert(now);
                let frame_time: Duration = now.saturating_duration_since(origin);
                self.indicator.on_frame(frame_time);
            }
            Message::ToggleAttached => {
                if self.indicator.is_attached() {
                    self.indicator.on_detached_from_window();
                } else {
                    self.indicator.on_attached_to_window();
                }
            }
            Message::ToggleVisibility => {
                let next = if self.indicator.visibility().is_visible() {
                    Visibility::Invisible
                } else {
                    Visibility::Visible
                };
                self.indicator.on_visibility_changed(next);
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Only ask for frames while the indicator actually animates
        if self.indicator.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let attach_label = if self.indicator.is_attached() {
            "Detach"
        } else {
            "Attach"
        };
        let visibility_label = if self.indicator.visibility().is_visible() {
            "Hide"
        } else {
            "Show"
        };

        let spinner = Canvas::new(IndicatorProgram {
            indicator: &self.indicator,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let controls = row![
            button(attach_label).on_press(Message::ToggleAttached),
            button(visibility_label).on_press(Message::ToggleVisibility),
            text(self.indicator.lifecycle_state().to_string()),
        ]
        .spacing(12);

        column![center(spinner), controls]
            .spacing(16)
            .padding(16)
            .into()
    }
}

/// Paints the indicator's recorded circles at 1:1, centered in the widget
#[cfg(feature = "gui")]
struct IndicatorProgram<'a> {
    indicator: &'a LoadingIndicator,
}

/// Record one frame with the indicator's own bounds centered in `width` x `height`
#[cfg(feature = "gui")]
fn record_centered(indicator: &LoadingIndicator, width: f32, height: f32) -> RecordingCanvas {
    let mut recording = RecordingCanvas::new();
    let left = ((width - indicator.width()) / 2.0).round();
    let top = ((height - indicator.height()) / 2.0).round();
    recording.translate(left, top);
    indicator.on_draw(&mut recording);
    recording
}

#[cfg(feature = "gui")]
impl<'a> canvas::Program<Message> for IndicatorProgram<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if !self.indicator.is_shown() {
            return vec![frame.into_geometry()];
        }

        let recording = record_centered(self.indicator, bounds.width, bounds.height);
        for circle in recording.circles().filter(|c| c.is_visible()) {
            let c = circle.color;
            let color = iced::Color::from_rgba8(c.r, c.g, c.b, c.alpha_f32());
            match circle.clip {
                Some(clip) => {
                    let region = Rectangle::new(
                        Point::new(clip.left, clip.top),
                        iced::Size::new(clip.width(), clip.height()),
                    );
                    // Drawing inside a clip is relative to the clip origin
                    frame.with_clip(region, |clipped| {
                        let center =
                            Point::new(circle.center.x - clip.left, circle.center.y - clip.top);
                        clipped.fill(&Path::circle(center, circle.radius), color);
                    });
                }
                None => {
                    let center = Point::new(circle.center.x, circle.center.y);
                    frame.fill(&Path::circle(center, circle.radius), color);
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Stub when GUI feature is not enabled
#[cfg(not(feature = "gui"))]
pub fn run() -> anyhow::Result<()> {
    eprintln!("GUI mode requires the 'gui' feature. Build with: cargo build --features gui");
    eprintln!("Or use the TUI mode (default): dotspin");
    std::process::exit(1);
}
