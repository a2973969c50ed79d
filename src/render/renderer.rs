//! The layered SVG render pipeline.
//!
//! `render_scene` is a pure, deterministic function of the scene: the same
//! bars, overlay registration sequence, and theme always produce a
//! byte-identical document. Paint order is background, grid, then the
//! registered overlays in registration order, then axis labels.

use chrono::DateTime;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{Bar, LinearScale, Viewport, price_range, project_candles};
use crate::error::ChartResult;
use crate::indicators;
use crate::layout::{PanelBand, PanelLayout};
use crate::overlay::{FIB_LEVELS, Overlay, Primitive, Signal, SignalKind};
use crate::render::svg::{PointBuf, SvgCanvas};
use crate::theme::RuntimeTheme;

/// Fraction of the price span added as padding above and below the bars.
const PRICE_PADDING_RATIO: f64 = 0.05;

/// Horizontal gridline count across the price panel.
const HORIZONTAL_GRID_LINES: usize = 8;

/// Base signal marker size in pixels.
const SIGNAL_SIZE: f64 = 12.0;

const LABEL_FONT_SIZE: f64 = 10.0;
const NEUTRAL_LEVEL_COLOR: &str = "#787b86";
const RSI_LINE_COLOR: &str = "#9C27B0";
const MACD_LINE_COLOR: &str = "#2196F3";
const MACD_SIGNAL_COLOR: &str = "#FF9800";
const BOLLINGER_CENTER_COLOR: &str = "#2196F3";
const BOLLINGER_BAND_COLOR: &str = "#2196F380";

/// Everything one render call consumes; borrowed from the chart builder.
#[derive(Debug)]
pub struct Scene<'a> {
    pub width: u32,
    pub height: u32,
    pub bars: &'a [Bar],
    pub theme: &'a RuntimeTheme,
    pub overlays: &'a [Overlay],
    pub show_grid: bool,
}

pub fn render_scene(scene: &Scene<'_>) -> ChartResult<String> {
    debug!(
        bars = scene.bars.len(),
        overlays = scene.overlays.len(),
        width = scene.width,
        height = scene.height,
        "render svg scene"
    );

    let Some((price_min, price_max)) = price_range(scene.bars) else {
        return Ok(render_empty(scene));
    };

    let viewport = Viewport::new(scene.width, scene.height).with_bar_count(scene.bars.len());
    let layout = PanelLayout::compute(viewport.chart_height(), scene.overlays);

    let padding = (price_max - price_min) * PRICE_PADDING_RATIO;
    let price_scale = LinearScale::fitted(price_min - padding, price_max + padding)?;

    let mut canvas = SvgCanvas::new(scene.width, scene.height);
    canvas.fill_rect(
        0.0,
        0.0,
        f64::from(scene.width),
        f64::from(scene.height),
        &scene.theme.background,
    );

    if scene.show_grid {
        draw_grid(&mut canvas, scene, viewport, layout.main);
    }

    for (index, overlay) in scene.overlays.iter().enumerate() {
        match overlay {
            Overlay::Candlesticks => {
                draw_candles(&mut canvas, scene, viewport, price_scale, layout.main)?;
            }
            Overlay::Sma { period, color } => {
                let values = indicators::sma(scene.bars, *period);
                draw_panel_series(&mut canvas, viewport, price_scale, layout.main, &values, color, 1.0);
            }
            Overlay::Ema { period, color } => {
                let values = indicators::ema(scene.bars, *period);
                draw_panel_series(&mut canvas, viewport, price_scale, layout.main, &values, color, 1.0);
            }
            Overlay::Bollinger { period, k } => {
                let bands = indicators::bollinger(scene.bars, *period, *k);
                draw_panel_series(
                    &mut canvas,
                    viewport,
                    price_scale,
                    layout.main,
                    &bands.upper,
                    BOLLINGER_BAND_COLOR,
                    1.0,
                );
                draw_panel_series(
                    &mut canvas,
                    viewport,
                    price_scale,
                    layout.main,
                    &bands.lower,
                    BOLLINGER_BAND_COLOR,
                    1.0,
                );
                draw_panel_series(
                    &mut canvas,
                    viewport,
                    price_scale,
                    layout.main,
                    &bands.center,
                    BOLLINGER_CENTER_COLOR,
                    1.0,
                );
            }
            Overlay::Rsi { period } => {
                if let Some(band) = layout.sub_panel(index) {
                    draw_rsi_panel(&mut canvas, scene, viewport, band, *period);
                }
            }
            Overlay::Macd { fast, slow, signal } => {
                if let Some(band) = layout.sub_panel(index) {
                    draw_macd_panel(&mut canvas, scene, viewport, band, *fast, *slow, *signal);
                }
            }
            Overlay::Primitive(primitive) => {
                draw_primitive(&mut canvas, scene, viewport, price_scale, layout.main, primitive);
            }
            Overlay::Signal(signal) => {
                draw_signal(&mut canvas, viewport, price_scale, layout.main, signal);
            }
        }
    }

    draw_axes(&mut canvas, scene, viewport, price_scale, layout.main);

    Ok(canvas.finish())
}

/// Minimal valid document for a chart with no bars.
fn render_empty(scene: &Scene<'_>) -> String {
    let mut canvas = SvgCanvas::new(scene.width, scene.height);
    canvas.fill_rect(
        0.0,
        0.0,
        f64::from(scene.width),
        f64::from(scene.height),
        &scene.theme.background,
    );
    canvas.text(
        f64::from(scene.width) / 2.0,
        f64::from(scene.height) / 2.0,
        "No data",
        &scene.theme.text,
        12.0,
        "middle",
    );
    canvas.finish()
}

fn draw_grid(canvas: &mut SvgCanvas, scene: &Scene<'_>, viewport: Viewport, main: PanelBand) {
    for i in 0..=HORIZONTAL_GRID_LINES {
        let y = main.y_offset + main.height * (i as f64 / HORIZONTAL_GRID_LINES as f64);
        canvas.line(0.0, y, viewport.chart_width(), y, &scene.theme.grid, 1.0);
    }

    let step = (scene.bars.len() / 10).max(1);
    for index in (0..scene.bars.len()).step_by(step) {
        let x = viewport.bar_to_x(index as f64);
        canvas.line(x, 0.0, x, viewport.chart_height(), &scene.theme.grid, 1.0);
    }
}

fn draw_candles(
    canvas: &mut SvgCanvas,
    scene: &Scene<'_>,
    viewport: Viewport,
    price_scale: LinearScale,
    main: PanelBand,
) -> ChartResult<()> {
    let geometry = project_candles(scene.bars, price_scale, viewport, main.height)?;

    canvas.push_clip(0.0, main.y_offset, viewport.chart_width(), main.height);
    for candle in &geometry {
        let (body, wick) = if candle.is_bullish {
            (&scene.theme.candle_up_body, &scene.theme.candle_up_wick)
        } else {
            (&scene.theme.candle_down_body, &scene.theme.candle_down_wick)
        };

        canvas.line(
            candle.center_x,
            main.y_offset + candle.wick_top,
            candle.center_x,
            main.y_offset + candle.wick_bottom,
            wick,
            1.0,
        );
        canvas.fill_rect(
            candle.body_left,
            main.y_offset + candle.body_top,
            candle.body_right - candle.body_left,
            (candle.body_bottom - candle.body_top).max(1.0),
            body,
        );
    }
    canvas.pop_clip();
    Ok(())
}

/// Draws an aligned value sequence as polyline segments inside a panel band.
/// Undefined entries break the line into gaps; nothing is interpolated.
fn draw_panel_series(
    canvas: &mut SvgCanvas,
    viewport: Viewport,
    scale: LinearScale,
    band: PanelBand,
    values: &[Option<f64>],
    color: &str,
    width: f64,
) {
    canvas.push_clip(0.0, band.y_offset, viewport.chart_width(), band.height);
    let mut segment = PointBuf::new();
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => segment.push((
                viewport.bar_to_x(i as f64),
                band.y_offset + scale.to_pixel_inverted(*v, band.height),
            )),
            None => {
                canvas.polyline(&segment, color, width);
                segment.clear();
            }
        }
    }
    canvas.polyline(&segment, color, width);
    canvas.pop_clip();
}

fn draw_rsi_panel(
    canvas: &mut SvgCanvas,
    scene: &Scene<'_>,
    viewport: Viewport,
    band: PanelBand,
    period: usize,
) {
    draw_sub_panel_frame(canvas, scene, viewport, band);

    let scale = match LinearScale::new(0.0, 100.0) {
        Ok(scale) => scale,
        Err(_) => return,
    };

    for (level, color) in [
        (70.0, "#ef535060"),
        (30.0, "#26a69a60"),
        (50.0, "#787b8640"),
    ] {
        let y = band.y_offset + scale.to_pixel_inverted(level, band.height);
        canvas.line(0.0, y, viewport.chart_width(), y, color, 0.5);
    }

    let values = indicators::rsi(scene.bars, period);
    draw_panel_series(canvas, viewport, scale, band, &values, RSI_LINE_COLOR, 1.0);
}

fn draw_macd_panel(
    canvas: &mut SvgCanvas,
    scene: &Scene<'_>,
    viewport: Viewport,
    band: PanelBand,
    fast: usize,
    slow: usize,
    signal: usize,
) {
    draw_sub_panel_frame(canvas, scene, viewport, band);

    let series = indicators::macd(scene.bars, fast, slow, signal);

    // Symmetric range about zero from the largest magnitude in any of the
    // three sequences; a flat all-zero series still gets a unit span.
    let max_abs = series
        .macd
        .iter()
        .chain(&series.signal)
        .chain(&series.histogram)
        .flatten()
        .map(|v| OrderedFloat(v.abs()))
        .max()
        .map_or(0.0, |v| v.into_inner());
    let Ok(scale) = LinearScale::fitted(-max_abs, max_abs) else {
        return;
    };

    let zero_y = band.y_offset + scale.to_pixel_inverted(0.0, band.height);
    canvas.dashed_line(
        0.0,
        zero_y,
        viewport.chart_width(),
        zero_y,
        NEUTRAL_LEVEL_COLOR,
        1.0,
        "2,2",
    );

    canvas.push_clip(0.0, band.y_offset, viewport.chart_width(), band.height);
    let half = viewport.bar_width() / 2.0;
    for (i, value) in series.histogram.iter().enumerate() {
        let Some(v) = value else { continue };
        let color = if *v >= 0.0 {
            &scene.theme.candle_up_body
        } else {
            &scene.theme.candle_down_body
        };
        let y = band.y_offset + scale.to_pixel_inverted(*v, band.height);
        let x = viewport.bar_to_x(i as f64);
        canvas.fill_rect(
            x - half,
            y.min(zero_y),
            half * 2.0,
            (y - zero_y).abs().max(1.0),
            color,
        );
    }
    canvas.pop_clip();

    draw_panel_series(canvas, viewport, scale, band, &series.macd, MACD_LINE_COLOR, 1.0);
    draw_panel_series(
        canvas,
        viewport,
        scale,
        band,
        &series.signal,
        MACD_SIGNAL_COLOR,
        1.0,
    );
}

fn draw_sub_panel_frame(
    canvas: &mut SvgCanvas,
    scene: &Scene<'_>,
    viewport: Viewport,
    band: PanelBand,
) {
    canvas.fill_rect(
        0.0,
        band.y_offset,
        viewport.chart_width(),
        band.height,
        &scene.theme.background,
    );
    canvas.line(
        0.0,
        band.y_offset,
        viewport.chart_width(),
        band.y_offset,
        &scene.theme.grid,
        1.0,
    );
}

fn draw_primitive(
    canvas: &mut SvgCanvas,
    scene: &Scene<'_>,
    viewport: Viewport,
    price_scale: LinearScale,
    main: PanelBand,
    primitive: &Primitive,
) {
    let x_of = |bar_index: f64| viewport.bar_to_x(bar_index);
    let y_of = |price: f64| main.y_offset + price_scale.to_pixel_inverted(price, main.height);
    let accent = &scene.theme.accent;

    canvas.push_clip(0.0, main.y_offset, viewport.chart_width(), main.height);
    match primitive {
        Primitive::TrendLine { start, end } => {
            canvas.line(x_of(start.0), y_of(start.1), x_of(end.0), y_of(end.1), accent, 1.5);
        }
        Primitive::HorizontalLine { price } => {
            let y = y_of(*price);
            canvas.line(0.0, y, viewport.chart_width(), y, accent, 1.0);
        }
        Primitive::VerticalLine { bar_index } => {
            let x = x_of(*bar_index);
            canvas.line(x, main.y_offset, x, main.y_offset + main.height, accent, 1.0);
        }
        Primitive::Rectangle { a, b } => {
            let (x1, x2) = (x_of(a.0).min(x_of(b.0)), x_of(a.0).max(x_of(b.0)));
            let (y1, y2) = (y_of(a.1).min(y_of(b.1)), y_of(a.1).max(y_of(b.1)));
            canvas.fill_rect(x1, y1, x2 - x1, y2 - y1, &format!("{accent}20"));
            canvas.line(x1, y1, x2, y1, accent, 1.0);
            canvas.line(x2, y1, x2, y2, accent, 1.0);
            canvas.line(x2, y2, x1, y2, accent, 1.0);
            canvas.line(x1, y2, x1, y1, accent, 1.0);
        }
        Primitive::FibRetracement { a, b } => {
            let left = x_of(a.0).min(x_of(b.0));
            for ratio in FIB_LEVELS {
                let price = a.1 + (b.1 - a.1) * ratio;
                let y = y_of(price);
                canvas.line(left, y, viewport.chart_width(), y, accent, 1.0);
                canvas.text(
                    left + 2.0,
                    y - 2.0,
                    &format!("{:.1}%", ratio * 100.0),
                    &scene.theme.text,
                    LABEL_FONT_SIZE,
                    "start",
                );
            }
            // Connector between the two anchors.
            canvas.dashed_line(
                x_of(a.0),
                y_of(a.1),
                x_of(b.0),
                y_of(b.1),
                accent,
                1.0,
                "4,4",
            );
        }
    }
    canvas.pop_clip();
}

fn draw_signal(
    canvas: &mut SvgCanvas,
    viewport: Viewport,
    price_scale: LinearScale,
    main: PanelBand,
    signal: &Signal,
) {
    let x = viewport.bar_to_x(signal.bar_index as f64);
    let y = main.y_offset + price_scale.to_pixel_inverted(signal.price, main.height);
    let color = signal.kind.color();
    let half = SIGNAL_SIZE / 2.0;

    match signal.kind {
        SignalKind::Buy => {
            canvas.polygon(
                &[(x, y - half), (x - half, y + half), (x + half, y + half)],
                color,
            );
        }
        SignalKind::Sell => {
            canvas.polygon(
                &[(x, y + half), (x - half, y - half), (x + half, y - half)],
                color,
            );
        }
        SignalKind::TakeProfit | SignalKind::StopLoss => {
            canvas.circle(x, y, half, color);
        }
    }

    if let Some(label) = &signal.label {
        canvas.text(x + SIGNAL_SIZE, y, label, color, LABEL_FONT_SIZE, "start");
    }
}

fn draw_axes(
    canvas: &mut SvgCanvas,
    scene: &Scene<'_>,
    viewport: Viewport,
    price_scale: LinearScale,
    main: PanelBand,
) {
    // Price ticks along the right gutter, aligned with the horizontal grid.
    let (domain_min, domain_max) = price_scale.domain();
    for i in 0..=HORIZONTAL_GRID_LINES {
        let fraction = i as f64 / HORIZONTAL_GRID_LINES as f64;
        let value = domain_max - (domain_max - domain_min) * fraction;
        let y = main.y_offset + main.height * fraction;
        canvas.text(
            viewport.chart_width() + 4.0,
            y + 3.0,
            &format!("{value:.2}"),
            &scene.theme.text,
            LABEL_FONT_SIZE,
            "start",
        );
    }

    // Time labels along the bottom band at the vertical grid cadence.
    let step = (scene.bars.len() / 10).max(1);
    for index in (0..scene.bars.len()).step_by(step) {
        let x = viewport.bar_to_x(index as f64);
        let label = DateTime::from_timestamp(scene.bars[index].timestamp, 0)
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        canvas.text(
            x,
            viewport.chart_height() + 14.0,
            &label,
            &scene.theme.text,
            LABEL_FONT_SIZE,
            "middle",
        );
    }
}
