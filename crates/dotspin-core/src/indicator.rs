//! The rotating-dots loading indicator

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::{IntAnimator, LinearInterpolator, RepeatCount, RepeatMode};
use crate::color::{Color, ColorResolver};
use crate::config::{AttributeSet, IndicatorConfig};
use crate::error::{Error, Result};
use crate::geometry::{self, Dot, DEGREES_PER_LINE, LINE_COUNT, MAX_ANIMATION_VALUE};
use crate::lifecycle::{AnimationCommand, LifecycleEvent, LifecycleState};
use crate::metrics::DisplayMetrics;
use crate::render::{Canvas, Paint, Point, Rect, StrokeCap};
use crate::view::{View, ViewBase, Visibility};

/// A ring of eight dots of increasing size, rotating while shown
///
/// The animation exists only while the indicator is attached and visible.
/// Hosts feed frame timestamps through [`LoadingIndicator::on_frame`] and
/// redraw when [`View::take_invalidation`] reports a pending request.
#[derive(Debug)]
pub struct LoadingIndicator {
    base: ViewBase,
    config: IndicatorConfig,
    paint: Paint,
    lifecycle: LifecycleState,
    animator: Option<IntAnimator>,
    /// Written by the animator's frame listener
    animation_value: Rc<Cell<i32>>,
}

impl LoadingIndicator {
    /// A detached indicator, laid out at its preferred size until the host
    /// calls [`View::on_layout`]
    pub fn new(config: IndicatorConfig) -> Self {
        let mut base = ViewBase::new();
        base.layout(config.size, config.size);
        base.take_invalidation();
        Self {
            base,
            paint: Self::paint_for(&config),
            config,
            lifecycle: LifecycleState::Detached,
            animator: None,
            animation_value: Rc::new(Cell::new(0)),
        }
    }

    /// Build from style attributes; unset attributes take their defaults
    pub fn from_attributes(attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self> {
        IndicatorConfig::from_attributes(attrs, metrics).map(Self::new)
    }

    fn paint_for(config: &IndicatorConfig) -> Paint {
        Paint {
            color: config.color,
            anti_alias: true,
            stroke_cap: StrokeCap::Round,
            stroke_width: geometry::stroke_width(config.size),
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn color(&self) -> Color {
        self.paint.color
    }

    pub fn size(&self) -> f32 {
        self.config.size
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.config.duration_ms)
    }

    pub fn stroke_width(&self) -> f32 {
        self.paint.stroke_width
    }

    /// Side of the square the indicator wants to be laid out in
    pub fn preferred_size(&self) -> f32 {
        self.config.size
    }

    /// Replace the dot color and request a redraw
    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
        self.paint = Self::paint_for(&self.config);
        self.base.invalidate();
    }

    /// Resolve a color resource and apply it
    ///
    /// Unknown ids leave the current color in place.
    pub fn set_color_resource(&mut self, id: &str, resources: &dyn ColorResolver) -> Result<()> {
        let color = resources
            .resolve_color(id)
            .ok_or_else(|| Error::UnknownColorResource(id.to_string()))?;
        tracing::debug!(id, %color, "Applying color resource");
        self.set_color(color);
        Ok(())
    }

    /// Current frame of the rotation, `0..=7`
    pub fn animation_value(&self) -> i32 {
        self.animation_value.get()
    }

    pub fn rotation_degrees(&self) -> f32 {
        geometry::rotation_degrees(self.animation_value())
    }

    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle
    }

    pub fn has_animator(&self) -> bool {
        self.animator.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.as_ref().is_some_and(IntAnimator::is_running)
    }

    /// Number of frame callbacks registered on the live animator
    pub fn frame_listener_count(&self) -> usize {
        self.animator
            .as_ref()
            .map_or(0, IntAnimator::listener_count)
    }

    /// Center of the laid-out box, in view coordinates
    pub fn center(&self) -> Point {
        Point::new(self.base.width() / 2.0, self.base.height() / 2.0)
    }

    /// Dot placement for the current frame, in view coordinates
    pub fn dot_layout(&self) -> [Dot; LINE_COUNT] {
        geometry::layout_dots_at(self.center(), self.config.size, self.animation_value())
    }

    /// Deliver a frame from the host's frame clock
    ///
    /// Returns `true` if an animation consumed the frame.
    pub fn on_frame(&mut self, frame_time: Duration) -> bool {
        match self.animator.as_mut() {
            Some(animator) => animator.do_frame(frame_time),
            None => false,
        }
    }

    /// Start the rotation, or resume it if it exists but is not running
    ///
    /// Calling this while the rotation runs changes nothing.
    pub fn start_animation(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            if !animator.is_running() {
                animator.resume();
            }
            return;
        }

        let value = Rc::clone(&self.animation_value);
        let invalidator = self.base.invalidator();

        let mut animator = IntAnimator::new(0, MAX_ANIMATION_VALUE)
            .with_duration(self.duration())
            .with_repeat_count(RepeatCount::Infinite)
            .with_repeat_mode(RepeatMode::Restart)
            .with_interpolator(LinearInterpolator);
        animator.add_update_listener(move |v| {
            value.set(v);
            invalidator.invalidate();
        });

        self.animation_value.set(0);
        animator.start();
        self.animator = Some(animator);
    }

    /// Cancel and drop the rotation; a later start builds a fresh one
    pub fn stop_animation(&mut self) {
        if let Some(mut animator) = self.animator.take() {
            animator.remove_all_update_listeners();
            animator.cancel();
        }
    }

    fn dispatch(&mut self, event: LifecycleEvent) {
        let (next, command) = self.lifecycle.transition(event);
        if next != self.lifecycle {
            tracing::debug!(from = %self.lifecycle, to = %next, "Indicator lifecycle transition");
        }
        self.lifecycle = next;

        match command {
            Some(AnimationCommand::Start) => self.start_animation(),
            Some(AnimationCommand::Stop) => self.stop_animation(),
            None => {}
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl View for LoadingIndicator {
    fn base(&self) -> &ViewBase {
        &self.base
    }

    fn on_attached_to_window(&mut self) {
        self.base.on_attached_to_window();
        self.dispatch(LifecycleEvent::Attached(self.base.visibility()));
    }

    fn on_detached_from_window(&mut self) {
        self.base.on_detached_from_window();
        self.dispatch(LifecycleEvent::Detached);
    }

    fn on_visibility_changed(&mut self, visibility: Visibility) {
        self.base.on_visibility_changed(visibility);
        self.dispatch(LifecycleEvent::VisibilityChanged(visibility));
    }

    fn on_layout(&mut self, width: f32, height: f32) {
        self.base.layout(width, height);
    }

    fn on_draw(&self, canvas: &mut dyn Canvas) {
        let size = self.config.size;
        let center = self.center();
        let offset = size / 2.0 - self.paint.stroke_width / 2.0;

        // Own layer so the per-dot transforms stay inside the view
        let saved = canvas.save_layer(Rect::new(0.0, 0.0, self.base.width(), self.base.height()));
        canvas.rotate_about(self.rotation_degrees(), center.x, center.y);
        canvas.translate(center.x, center.y);

        for index in 0..LINE_COUNT {
            canvas.rotate(DEGREES_PER_LINE);
            let radius = geometry::dot_radius(index, size);
            canvas.translate(0.0, -offset);
            canvas.draw_circle(0.0, 0.0, radius, &self.paint);
            canvas.translate(0.0, offset);
        }

        canvas.restore_to_count(saved);
    }
}
