//! Viewport geometry and user preferences.

/// How a programmatic scroll should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The last `scrollIntoView`-style request made by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
    pub prefers_reduced_motion: bool,
    pub last_scroll: Option<ScrollRequest>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::desktop()
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
            prefers_reduced_motion: false,
            last_scroll: None,
        }
    }

    pub fn desktop() -> Self {
        Self::new(1280.0, 800.0)
    }

    pub fn mobile() -> Self {
        Self::new(390.0, 844.0)
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.prefers_reduced_motion = reduced;
        self
    }

    pub fn is_narrow(&self, breakpoint: f64) -> bool {
        self.width <= breakpoint
    }

    /// Scrolls so that `top` is at the top edge of the viewport.
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.scroll_y = top;
        self.last_scroll = Some(ScrollRequest { top, behavior });
    }
}
