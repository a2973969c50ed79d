//! Overlay registry: every drawing request issued against a chart before
//! rendering. Registration order is the paint order; later entries draw on
//! top. Entries are immutable once recorded and carry logical coordinates
//! (bar index, price) so they survive dimension changes before the terminal
//! render call.

/// Standard Fibonacci retracement ratios.
pub const FIB_LEVELS: &[f64] = &[0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

/// Height share of the drawable area taken by an RSI sub-panel.
pub const RSI_PANEL_RATIO: f64 = 0.15;

/// Height share of the drawable area taken by a MACD sub-panel.
pub const MACD_PANEL_RATIO: f64 = 0.20;

/// One recorded drawing request.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Candlesticks,
    Sma { period: usize, color: String },
    Ema { period: usize, color: String },
    Rsi { period: usize },
    Macd { fast: usize, slow: usize, signal: usize },
    Bollinger { period: usize, k: f64 },
    Primitive(Primitive),
    Signal(Signal),
}

impl Overlay {
    /// Height share claimed by a panel-requiring overlay, `None` for
    /// overlays that draw into the main price panel.
    #[must_use]
    pub fn panel_ratio(&self) -> Option<f64> {
        match self {
            Overlay::Rsi { .. } => Some(RSI_PANEL_RATIO),
            Overlay::Macd { .. } => Some(MACD_PANEL_RATIO),
            _ => None,
        }
    }
}

/// Drawing primitive anchored in (bar index, price) space.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    TrendLine { start: (f64, f64), end: (f64, f64) },
    HorizontalLine { price: f64 },
    VerticalLine { bar_index: f64 },
    Rectangle { a: (f64, f64), b: (f64, f64) },
    FibRetracement { a: (f64, f64), b: (f64, f64) },
}

/// Trading signal marker resolved to a styled glyph at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub kind: SignalKind,
    pub bar_index: usize,
    pub price: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Buy,
    Sell,
    TakeProfit,
    StopLoss,
}

impl SignalKind {
    /// Marker color keyed by kind.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            SignalKind::Buy | SignalKind::TakeProfit => "#26a69a",
            SignalKind::Sell | SignalKind::StopLoss => "#ef5350",
        }
    }
}
