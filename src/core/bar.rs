use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One period's open/high/low/close price and traded volume.
///
/// The indicator and render math assumes `high >= max(open, close, low)` and
/// `low <= min(open, close, high)`. The engine does not enforce this on the
/// plain constructor; callers feeding inconsistent bars get distorted
/// geometry, never a panic. Use [`Bar::validated`] to opt into checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    #[must_use]
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Builds a bar after checking that every price field is finite and the
    /// OHLC envelope is consistent.
    pub fn validated(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> ChartResult<Self> {
        if !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
            || !volume.is_finite()
        {
            return Err(ChartError::InvalidData(
                "bar values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData("bar low must be <= high".to_owned()));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "bar open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self::new(timestamp, open, high, low, close, volume))
    }

    /// Returns `true` when the close price is strictly greater than the open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close > self.open
    }
}

/// Returns `(min low, max high)` over the series, or `None` when empty.
#[must_use]
pub fn price_range(bars: &[Bar]) -> Option<(f64, f64)> {
    if bars.is_empty() {
        return None;
    }

    let min = bars
        .iter()
        .map(|bar| OrderedFloat(bar.low))
        .min()
        .map(|v| v.into_inner())?;
    let max = bars
        .iter()
        .map(|bar| OrderedFloat(bar.high))
        .max()
        .map(|v| v.into_inner())?;
    Some((min, max))
}
