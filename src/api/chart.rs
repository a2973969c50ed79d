use tracing::trace;

use crate::core::{Bar, PRICE_AXIS_WIDTH, TIME_AXIS_HEIGHT};
use crate::error::{ChartError, ChartResult};
use crate::overlay::{Overlay, Primitive, Signal, SignalKind};
use crate::render::{Scene, render_scene};
use crate::theme::{RuntimeTheme, UITheme};

/// Chained-mutation chart builder.
///
/// A chart accumulates bars, a theme, and an ordered overlay list, then
/// renders them with a single terminal [`Chart::render_svg`] call.
/// Registration order is the paint order. Methods that can reject their
/// parameters (indicator periods, primitive anchors) return
/// `ChartResult<Self>`; everything else chains infallibly.
#[derive(Debug, Clone)]
pub struct Chart {
    width: u32,
    height: u32,
    bars: Vec<Bar>,
    theme: RuntimeTheme,
    overlays: Vec<Overlay>,
    show_grid: bool,
}

impl Chart {
    /// Creates a chart over a pixel canvas. Canvases that leave no drawable
    /// area beyond the axis gutters are rejected here, so rendering never has
    /// to fail on the canvas size.
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        if f64::from(width) <= PRICE_AXIS_WIDTH || f64::from(height) <= TIME_AXIS_HEIGHT {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(Self {
            width,
            height,
            bars: Vec::new(),
            theme: RuntimeTheme::default(),
            overlays: Vec::new(),
            show_grid: true,
        })
    }

    /// Replaces the bar series wholesale.
    #[must_use]
    pub fn bars(mut self, bars: Vec<Bar>) -> Self {
        trace!(count = bars.len(), "set chart bars");
        self.bars = bars;
        self
    }

    /// Registers the candlestick series.
    #[must_use]
    pub fn candlesticks(mut self) -> Self {
        self.overlays.push(Overlay::Candlesticks);
        self
    }

    pub fn sma(mut self, period: usize, color: &str) -> ChartResult<Self> {
        validate_period("sma", period)?;
        self.overlays.push(Overlay::Sma {
            period,
            color: color.to_owned(),
        });
        Ok(self)
    }

    pub fn ema(mut self, period: usize, color: &str) -> ChartResult<Self> {
        validate_period("ema", period)?;
        self.overlays.push(Overlay::Ema {
            period,
            color: color.to_owned(),
        });
        Ok(self)
    }

    pub fn rsi(mut self, period: usize) -> ChartResult<Self> {
        validate_period("rsi", period)?;
        self.overlays.push(Overlay::Rsi { period });
        Ok(self)
    }

    pub fn macd(mut self, fast: usize, slow: usize, signal: usize) -> ChartResult<Self> {
        validate_period("macd fast", fast)?;
        validate_period("macd slow", slow)?;
        validate_period("macd signal", signal)?;
        self.overlays.push(Overlay::Macd { fast, slow, signal });
        Ok(self)
    }

    pub fn bollinger(mut self, period: usize, k: f64) -> ChartResult<Self> {
        validate_period("bollinger", period)?;
        if !k.is_finite() || k <= 0.0 {
            return Err(ChartError::InvalidParameter(
                "bollinger multiplier must be finite and > 0".to_owned(),
            ));
        }
        self.overlays.push(Overlay::Bollinger { period, k });
        Ok(self)
    }

    pub fn trend_line(mut self, start: (f64, f64), end: (f64, f64)) -> ChartResult<Self> {
        validate_anchor("trend line", start)?;
        validate_anchor("trend line", end)?;
        self.overlays
            .push(Overlay::Primitive(Primitive::TrendLine { start, end }));
        Ok(self)
    }

    pub fn horizontal_line(mut self, price: f64) -> ChartResult<Self> {
        if !price.is_finite() {
            return Err(ChartError::InvalidParameter(
                "horizontal line price must be finite".to_owned(),
            ));
        }
        self.overlays
            .push(Overlay::Primitive(Primitive::HorizontalLine { price }));
        Ok(self)
    }

    pub fn vertical_line(mut self, bar_index: f64) -> ChartResult<Self> {
        if !bar_index.is_finite() {
            return Err(ChartError::InvalidParameter(
                "vertical line index must be finite".to_owned(),
            ));
        }
        self.overlays
            .push(Overlay::Primitive(Primitive::VerticalLine { bar_index }));
        Ok(self)
    }

    pub fn rectangle(mut self, a: (f64, f64), b: (f64, f64)) -> ChartResult<Self> {
        validate_anchor("rectangle", a)?;
        validate_anchor("rectangle", b)?;
        self.overlays
            .push(Overlay::Primitive(Primitive::Rectangle { a, b }));
        Ok(self)
    }

    pub fn fib_retracement(mut self, a: (f64, f64), b: (f64, f64)) -> ChartResult<Self> {
        validate_anchor("fib retracement", a)?;
        validate_anchor("fib retracement", b)?;
        self.overlays
            .push(Overlay::Primitive(Primitive::FibRetracement { a, b }));
        Ok(self)
    }

    pub fn buy_signal(self, bar_index: usize, price: f64, label: Option<&str>) -> ChartResult<Self> {
        self.signal(SignalKind::Buy, bar_index, price, label)
    }

    pub fn sell_signal(
        self,
        bar_index: usize,
        price: f64,
        label: Option<&str>,
    ) -> ChartResult<Self> {
        self.signal(SignalKind::Sell, bar_index, price, label)
    }

    pub fn take_profit_signal(
        self,
        bar_index: usize,
        price: f64,
        label: Option<&str>,
    ) -> ChartResult<Self> {
        self.signal(SignalKind::TakeProfit, bar_index, price, label)
    }

    pub fn stop_loss_signal(
        self,
        bar_index: usize,
        price: f64,
        label: Option<&str>,
    ) -> ChartResult<Self> {
        self.signal(SignalKind::StopLoss, bar_index, price, label)
    }

    fn signal(
        mut self,
        kind: SignalKind,
        bar_index: usize,
        price: f64,
        label: Option<&str>,
    ) -> ChartResult<Self> {
        if !price.is_finite() {
            return Err(ChartError::InvalidParameter(
                "signal price must be finite".to_owned(),
            ));
        }
        self.overlays.push(Overlay::Signal(Signal {
            kind,
            bar_index,
            price,
            label: label.map(str::to_owned),
        }));
        Ok(self)
    }

    /// Overrides the theme background color.
    #[must_use]
    pub fn background(mut self, color: &str) -> Self {
        self.theme.background = color.to_owned();
        self
    }

    /// Overrides the candle up/down colors (bodies and wicks).
    #[must_use]
    pub fn colors(mut self, up: &str, down: &str) -> Self {
        self.theme.candle_up_body = up.to_owned();
        self.theme.candle_up_wick = up.to_owned();
        self.theme.candle_down_body = down.to_owned();
        self.theme.candle_down_wick = down.to_owned();
        self
    }

    /// Toggles the background grid (on by default).
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Replaces the whole theme.
    #[must_use]
    pub fn theme(mut self, theme: RuntimeTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn dark_theme(self) -> Self {
        self.theme(RuntimeTheme::from(UITheme::dark()))
    }

    #[must_use]
    pub fn light_theme(self) -> Self {
        self.theme(RuntimeTheme::from(UITheme::light()))
    }

    #[must_use]
    pub fn high_contrast_theme(self) -> Self {
        self.theme(RuntimeTheme::from(UITheme::high_contrast()))
    }

    #[must_use]
    pub fn cyberpunk_theme(self) -> Self {
        self.theme(RuntimeTheme::from(UITheme::cyberpunk()))
    }

    /// Registered overlays in paint order.
    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Renders the accumulated configuration into a self-contained SVG
    /// document. Pure and deterministic: identical configuration always
    /// yields a byte-identical string.
    pub fn render_svg(&self) -> ChartResult<String> {
        render_scene(&Scene {
            width: self.width,
            height: self.height,
            bars: &self.bars,
            theme: &self.theme,
            overlays: &self.overlays,
            show_grid: self.show_grid,
        })
    }
}

fn validate_period(name: &str, period: usize) -> ChartResult<()> {
    if period == 0 {
        return Err(ChartError::InvalidParameter(format!(
            "{name} period must be > 0"
        )));
    }
    Ok(())
}

fn validate_anchor(name: &str, point: (f64, f64)) -> ChartResult<()> {
    if !point.0.is_finite() || !point.1.is_finite() {
        return Err(ChartError::InvalidParameter(format!(
            "{name} anchors must be finite"
        )));
    }
    Ok(())
}
