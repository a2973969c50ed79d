use crate::core::Bar;

/// Simple moving average of close prices over a trailing window.
///
/// Warm-up: the first `period - 1` entries carry no value. `period == 0` or
/// `period >= bars.len()` yields an all-empty sequence (data insufficiency
/// is not an error; the overlay is simply absent).
#[must_use]
pub fn sma(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; bars.len()];
    if period == 0 || period >= bars.len() {
        return out;
    }

    for i in (period - 1)..bars.len() {
        let sum: f64 = bars[i + 1 - period..=i].iter().map(|b| b.close).sum();
        out[i] = Some(sum / period as f64);
    }
    out
}

/// Exponential moving average of close prices.
///
/// Seeded with the simple mean of the first `period` closes at index
/// `period - 1`, then `ema[i] = (close[i] - ema[i-1]) * k + ema[i-1]` with
/// `k = 2 / (period + 1)`. Same warm-up contract as [`sma`].
#[must_use]
pub fn ema(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; bars.len()];
    if period == 0 || period >= bars.len() {
        return out;
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed: f64 = bars[..period].iter().map(|b| b.close).sum::<f64>() / period as f64;

    let mut prev = seed;
    out[period - 1] = Some(seed);
    for i in period..bars.len() {
        prev = (bars[i].close - prev) * k + prev;
        out[i] = Some(prev);
    }
    out
}

/// Exponential moving average over a plain value sequence.
///
/// Used for the MACD signal line, which smooths derived values rather than
/// bar closes.
#[must_use]
pub(crate) fn ema_values(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || period >= values.len() {
        return out;
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;

    let mut prev = seed;
    out[period - 1] = Some(seed);
    for i in period..values.len() {
        prev = (values[i] - prev) * k + prev;
        out[i] = Some(prev);
    }
    out
}
