use crate::core::{Bar, LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

/// Projects bars into deterministic render geometry.
///
/// The function is intentionally pure and side-effect free so it can be used
/// both in rendering and in regression tests. `panel_height` is the pixel
/// height of the price panel the candles land in.
pub fn project_candles(
    bars: &[Bar],
    price_scale: LinearScale,
    viewport: Viewport,
    panel_height: f64,
) -> ChartResult<Vec<CandleGeometry>> {
    if !panel_height.is_finite() || panel_height <= 0.0 {
        return Err(ChartError::InvalidData(
            "panel height must be finite and > 0".to_owned(),
        ));
    }

    // For large series, optional parallel projection keeps output byte-stable
    // while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    {
        Ok(bars
            .par_iter()
            .enumerate()
            .map(|(i, bar)| project_single_candle(i, *bar, price_scale, viewport, panel_height))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(bars
            .iter()
            .enumerate()
            .map(|(i, bar)| project_single_candle(i, *bar, price_scale, viewport, panel_height))
            .collect())
    }
}

fn project_single_candle(
    index: usize,
    bar: Bar,
    price_scale: LinearScale,
    viewport: Viewport,
    panel_height: f64,
) -> CandleGeometry {
    let half = viewport.bar_width() / 2.0;
    let center_x = viewport.bar_to_x(index as f64);
    let open_y = price_scale.to_pixel_inverted(bar.open, panel_height);
    let close_y = price_scale.to_pixel_inverted(bar.close, panel_height);
    let wick_top = price_scale.to_pixel_inverted(bar.high, panel_height);
    let wick_bottom = price_scale.to_pixel_inverted(bar.low, panel_height);

    CandleGeometry {
        center_x,
        body_left: center_x - half,
        body_right: center_x + half,
        body_top: open_y.min(close_y),
        body_bottom: open_y.max(close_y),
        wick_top,
        wick_bottom,
        is_bullish: bar.is_bullish(),
    }
}
