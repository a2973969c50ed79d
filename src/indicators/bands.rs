use crate::core::Bar;

use super::moving_average::sma;

/// The three aligned Bollinger sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub center: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Bollinger bands: SMA center line with bands at `k` population standard
/// deviations over the same trailing window. Same warm-up contract as SMA.
#[must_use]
pub fn bollinger(bars: &[Bar], period: usize, k: f64) -> BollingerBands {
    let center = sma(bars, period);
    let mut upper = vec![None; bars.len()];
    let mut lower = vec![None; bars.len()];

    for (i, mean) in center.iter().enumerate() {
        let Some(mean) = *mean else { continue };
        let window = &bars[i + 1 - period..=i];
        let variance = window
            .iter()
            .map(|b| (b.close - mean) * (b.close - mean))
            .sum::<f64>()
            / period as f64;
        let half_width = k * variance.sqrt();
        upper[i] = Some(mean + half_width);
        lower[i] = Some(mean - half_width);
    }

    BollingerBands {
        center,
        upper,
        lower,
    }
}
