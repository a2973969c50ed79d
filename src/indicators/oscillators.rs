use crate::core::Bar;

use super::moving_average::{ema, ema_values};

/// Relative Strength Index with Wilder smoothing.
///
/// The first average gain/loss is the simple mean of the first `period`
/// up/down moves; thereafter `avg = (avg * (period - 1) + move) / period`.
/// `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`, saturating at 100 when
/// the average loss is zero. Warm-up: the first `period` entries are empty.
#[must_use]
pub fn rsi(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; bars.len()];
    if period == 0 || period >= bars.len() {
        return out;
    }

    let mut gains = vec![0.0; bars.len()];
    let mut losses = vec![0.0; bars.len()];
    for i in 1..bars.len() {
        let delta = bars[i].close - bars[i - 1].close;
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let mut avg_gain: f64 = gains[1..=period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[1..=period].iter().sum::<f64>() / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in (period + 1)..bars.len() {
        avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}

/// The three aligned MACD sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Moving Average Convergence/Divergence.
///
/// `macd = EMA(fast) - EMA(slow)` where both sides are defined; the signal
/// line is an EMA of the defined macd values; the histogram is their
/// difference. Warm-up is dominated by `slow + signal`.
#[must_use]
pub fn macd(bars: &[Bar], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let len = bars.len();
    let mut series = MacdSeries {
        macd: vec![None; len],
        signal: vec![None; len],
        histogram: vec![None; len],
    };
    if fast == 0 || slow == 0 || signal == 0 {
        return series;
    }

    let fast_ema = ema(bars, fast);
    let slow_ema = ema(bars, slow);
    for i in 0..len {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            series.macd[i] = Some(f - s);
        }
    }

    // The signal EMA runs over the compacted defined macd values, then maps
    // back onto the original bar indexes.
    let defined: Vec<(usize, f64)> = series
        .macd
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|value| (i, value)))
        .collect();
    let values: Vec<f64> = defined.iter().map(|&(_, v)| v).collect();
    for (slot, smoothed) in defined.iter().zip(ema_values(&values, signal)) {
        series.signal[slot.0] = smoothed;
    }

    for i in 0..len {
        if let (Some(m), Some(s)) = (series.macd[i], series.signal[i]) {
            series.histogram[i] = Some(m - s);
        }
    }
    series
}
