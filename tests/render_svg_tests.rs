use candlekit::{Bar, Chart};

fn sample_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.3).sin() * 6.0 + i as f64 * 0.05;
            Bar::new(
                1_700_000_000 + i as i64 * 3600,
                base,
                base + 2.5,
                base - 2.5,
                base + if i % 3 == 0 { -1.5 } else { 1.5 },
                50_000.0,
            )
        })
        .collect()
}

fn full_chart() -> Chart {
    Chart::new(1200, 800)
        .expect("chart")
        .bars(sample_bars(80))
        .candlesticks()
        .sma(20, "#ffaa00")
        .expect("sma")
        .ema(10, "#00ccff")
        .expect("ema")
        .bollinger(20, 2.0)
        .expect("bollinger")
        .rsi(14)
        .expect("rsi")
        .macd(12, 26, 9)
        .expect("macd")
        .trend_line((5.0, 95.0), (70.0, 108.0))
        .expect("trend line")
        .fib_retracement((10.0, 94.0), (60.0, 112.0))
        .expect("fib")
        .buy_signal(12, 96.0, Some("entry"))
        .expect("buy")
        .take_profit_signal(55, 111.0, Some("tp"))
        .expect("tp")
}

#[test]
fn identical_configuration_renders_byte_identically() {
    let first = full_chart().render_svg().expect("first render");
    let second = full_chart().render_svg().expect("second render");
    assert_eq!(first, second);

    // Rendering the same chart twice is also stable.
    let chart = full_chart();
    assert_eq!(
        chart.render_svg().expect("render a"),
        chart.render_svg().expect("render b")
    );
}

#[test]
fn output_is_a_self_contained_svg_document() {
    let svg = full_chart().render_svg().expect("render");
    assert!(svg.starts_with("<?xml version=\"1.0\""));
    assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(!svg.contains("href"), "no external references expected");
}

#[test]
fn empty_bar_store_renders_a_placeholder_not_an_error() {
    let svg = Chart::new(800, 600)
        .expect("chart")
        .candlesticks()
        .render_svg()
        .expect("render");
    assert!(svg.contains("No data"));
    assert!(svg.contains("#131722"), "dark background is the default");
}

#[test]
fn insufficient_sma_history_renders_no_line() {
    let svg = Chart::new(800, 600)
        .expect("chart")
        .bars(sample_bars(1))
        .candlesticks()
        .sma(20, "#ffaa00")
        .expect("registration succeeds; data insufficiency is not an error")
        .render_svg()
        .expect("render");

    assert!(!svg.contains("#ffaa00"), "sma overlay must be absent");
    assert!(!svg.contains("<polyline"), "no indicator line at all");
}

#[test]
fn fib_retracement_labels_the_standard_ratios() {
    let svg = Chart::new(1000, 700)
        .expect("chart")
        .bars(sample_bars(50))
        .fib_retracement((5.0, 95.0), (45.0, 110.0))
        .expect("fib")
        .render_svg()
        .expect("render");

    for label in ["0.0%", "23.6%", "38.2%", "50.0%", "61.8%", "78.6%", "100.0%"] {
        assert!(svg.contains(label), "missing fib label {label}");
    }
}

#[test]
fn rectangle_and_vertical_line_primitives_are_drawn() {
    let svg = Chart::new(1000, 700)
        .expect("chart")
        .bars(sample_bars(50))
        .rectangle((5.0, 95.0), (20.0, 110.0))
        .expect("rectangle")
        .vertical_line(10.0)
        .expect("vertical line")
        .render_svg()
        .expect("render");

    // The rectangle body is the accent color at ~12% alpha.
    assert!(svg.contains(r##"fill="#2962ff20""##));
    // The vertical line spans the full price panel at the bar-10 slot
    // center: 936 px of drawable width over 50 bars puts it at x = 196.56.
    assert!(svg.contains(
        r##"<line x1="196.56" y1="0.00" x2="196.56" y2="676.00" stroke="#2962ff" stroke-width="1.00"/>"##
    ));
}

#[test]
fn sub_panels_appear_only_when_requested() {
    let plain = Chart::new(1000, 700)
        .expect("chart")
        .bars(sample_bars(50))
        .candlesticks()
        .render_svg()
        .expect("render");
    let with_rsi = Chart::new(1000, 700)
        .expect("chart")
        .bars(sample_bars(50))
        .candlesticks()
        .rsi(14)
        .expect("rsi")
        .render_svg()
        .expect("render");

    // The RSI line color only shows up when the oscillator panel exists.
    assert!(!plain.contains("#9C27B0"));
    assert!(with_rsi.contains("#9C27B0"));
}

#[test]
fn theme_shorthands_change_the_emitted_colors() {
    let base = Chart::new(800, 600).expect("chart").bars(sample_bars(20));
    let dark = base.clone().dark_theme().render_svg().expect("dark");
    let light = base.clone().light_theme().render_svg().expect("light");
    let custom = base
        .background("#223344")
        .colors("#11ff11", "#ff1111")
        .candlesticks()
        .render_svg()
        .expect("custom");

    assert!(dark.contains("#131722"));
    assert!(light.contains("#ffffff"));
    assert!(custom.contains("#223344"));
    assert!(custom.contains("#11ff11"));
}

#[test]
fn signal_labels_are_xml_escaped() {
    let svg = Chart::new(800, 600)
        .expect("chart")
        .bars(sample_bars(20))
        .sell_signal(5, 102.0, Some("exit <now> & \"fast\""))
        .expect("signal")
        .render_svg()
        .expect("render");

    assert!(svg.contains("exit &lt;now&gt; &amp; &quot;fast&quot;"));
    assert!(!svg.contains("exit <now>"));
}

#[test]
fn grid_can_be_disabled() {
    let bars = sample_bars(30);
    let with_grid = Chart::new(800, 600)
        .expect("chart")
        .bars(bars.clone())
        .render_svg()
        .expect("render");
    let without_grid = Chart::new(800, 600)
        .expect("chart")
        .bars(bars)
        .grid(false)
        .render_svg()
        .expect("render");

    assert!(with_grid.contains("#2a2e39"));
    assert!(without_grid.len() < with_grid.len());
}

#[test]
fn version_is_the_package_version() {
    assert_eq!(candlekit::version(), env!("CARGO_PKG_VERSION"));
}
