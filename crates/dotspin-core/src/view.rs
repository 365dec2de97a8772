//! View callbacks and the bookkeeping every view shares

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::render::Canvas;

/// Visibility of a view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden but still taking up space
    Invisible,
    /// Hidden and taking no space
    Gone,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => write!(f, "visible"),
            Self::Invisible => write!(f, "invisible"),
            Self::Gone => write!(f, "gone"),
        }
    }
}

/// Handle that marks a view as needing a redraw
///
/// Cheap to clone; clones share the same flag. Not `Send`: views live on
/// the UI thread.
#[derive(Debug, Clone, Default)]
pub struct Invalidator(Rc<Cell<bool>>);

impl Invalidator {
    pub fn invalidate(&self) {
        self.0.set(true);
    }

    pub fn is_invalidated(&self) -> bool {
        self.0.get()
    }

    /// Read and clear the flag
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// State every view carries: attachment, visibility, laid-out size and
/// redraw requests
#[derive(Debug, Clone, Default)]
pub struct ViewBase {
    attached: bool,
    visibility: Visibility,
    width: f32,
    height: f32,
    invalidator: Invalidator,
}

impl ViewBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Attached and visible
    pub fn is_shown(&self) -> bool {
        self.attached && self.visibility.is_visible()
    }

    /// Laid-out width in pixels
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Laid-out height in pixels
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Record the size the host laid the view out at
    ///
    /// A change of size requests a redraw.
    pub fn layout(&mut self, width: f32, height: f32) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.invalidate();
        }
    }

    pub fn invalidator(&self) -> Invalidator {
        self.invalidator.clone()
    }

    pub fn invalidate(&self) {
        self.invalidator.invalidate();
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidator.is_invalidated()
    }

    pub fn take_invalidation(&self) -> bool {
        self.invalidator.take()
    }

    pub fn on_attached_to_window(&mut self) {
        self.attached = true;
        self.invalidate();
    }

    pub fn on_detached_from_window(&mut self) {
        self.attached = false;
    }

    pub fn on_visibility_changed(&mut self, visibility: Visibility) {
        if self.visibility != visibility {
            self.visibility = visibility;
            self.invalidate();
        }
    }
}

/// Callbacks a host delivers to a view
///
/// Implementations forward to their [`ViewBase`] before doing their own
/// work.
pub trait View {
    fn base(&self) -> &ViewBase;

    fn on_attached_to_window(&mut self);

    fn on_detached_from_window(&mut self);

    fn on_visibility_changed(&mut self, visibility: Visibility);

    /// The host assigned the view a `width` x `height` box
    fn on_layout(&mut self, width: f32, height: f32);

    /// Draw in view coordinates, `(0, 0)` to `(width, height)`
    fn on_draw(&self, canvas: &mut dyn Canvas);

    fn is_attached(&self) -> bool {
        self.base().is_attached()
    }

    fn visibility(&self) -> Visibility {
        self.base().visibility()
    }

    fn is_shown(&self) -> bool {
        self.base().is_shown()
    }

    fn width(&self) -> f32 {
        self.base().width()
    }

    fn height(&self) -> f32 {
        self.base().height()
    }

    fn invalidate(&self) {
        self.base().invalidate();
    }

    /// Read and clear the pending redraw request
    fn take_invalidation(&self) -> bool {
        self.base().take_invalidation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidator_clones_share_flag() {
        let base = ViewBase::new();
        let handle = base.invalidator();
        assert!(!base.is_invalidated());
        handle.invalidate();
        assert!(base.is_invalidated());
        assert!(base.take_invalidation());
        assert!(!handle.is_invalidated());
    }

    #[test]
    fn test_base_tracks_attachment_and_visibility() {
        let mut base = ViewBase::new();
        assert!(!base.is_shown());

        base.on_attached_to_window();
        assert!(base.is_shown());
        assert!(base.take_invalidation());

        base.on_visibility_changed(Visibility::Gone);
        assert!(!base.is_shown());
        assert!(base.take_invalidation());

        base.on_visibility_changed(Visibility::Gone);
        assert!(!base.take_invalidation());

        base.on_detached_from_window();
        assert!(!base.is_attached());
        assert_eq!(base.visibility(), Visibility::Gone);
    }

    #[test]
    fn test_layout_invalidates_only_on_change() {
        let mut base = ViewBase::new();
        base.layout(100.0, 60.0);
        assert_eq!((base.width(), base.height()), (100.0, 60.0));
        assert!(base.take_invalidation());

        base.layout(100.0, 60.0);
        assert!(!base.take_invalidation());
    }
}
