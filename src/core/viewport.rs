/// Width in pixels reserved on the right edge for price-axis labels.
pub const PRICE_AXIS_WIDTH: f64 = 64.0;

/// Height in pixels reserved on the bottom edge for time-axis labels.
pub const TIME_AXIS_HEIGHT: f64 = 24.0;

/// Bar count assumed by a viewport that has not been bound to a series yet.
const DEFAULT_BAR_COUNT: usize = 100;

/// Drawable chart region derived from the canvas dimensions and bar count.
///
/// `bar_width` and `bar_to_x` depend on the bar count; a freshly constructed
/// viewport reports informative defaults until [`Viewport::with_bar_count`]
/// binds it to a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    bar_count: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bar_count: DEFAULT_BAR_COUNT,
        }
    }

    #[must_use]
    pub fn with_bar_count(mut self, bar_count: usize) -> Self {
        self.bar_count = bar_count.max(1);
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Drawable width after the price-axis gutter.
    #[must_use]
    pub fn chart_width(self) -> f64 {
        (f64::from(self.width) - PRICE_AXIS_WIDTH).max(0.0)
    }

    /// Drawable height after the time-axis band.
    #[must_use]
    pub fn chart_height(self) -> f64 {
        (f64::from(self.height) - TIME_AXIS_HEIGHT).max(0.0)
    }

    /// Horizontal pitch of one bar slot.
    #[must_use]
    pub fn bar_spacing(self) -> f64 {
        self.chart_width() / self.bar_count as f64
    }

    /// Candle body width: 80% of the slot, never thinner than one pixel.
    #[must_use]
    pub fn bar_width(self) -> f64 {
        (self.bar_spacing() * 0.8).max(1.0)
    }

    /// X pixel of a bar slot center. Shared by every panel so an index
    /// aligns vertically across the whole chart.
    #[must_use]
    pub fn bar_to_x(self, bar_index: f64) -> f64 {
        self.bar_spacing() * (bar_index + 0.5)
    }
}
