use approx::assert_relative_eq;
use candlekit::Bar;
use candlekit::indicators::{bollinger, ema, macd, rsi, sma};

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Bar::new(
                1_700_000_000 + i as i64 * 60,
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000.0,
            )
        })
        .collect()
}

#[test]
fn sma_warm_up_and_exact_window_mean() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let values = sma(&bars, 3);

    assert_eq!(values.len(), bars.len());
    assert_eq!(values[0], None);
    assert_eq!(values[1], None);
    assert_relative_eq!(values[2].expect("first defined"), 2.0);
    assert_relative_eq!(values[5].expect("last"), 5.0);
}

#[test]
fn ema_is_seeded_with_the_simple_mean() {
    let bars = bars_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let values = ema(&bars, 3);

    assert_eq!(values[1], None);
    let seed = values[2].expect("seed");
    assert_relative_eq!(seed, 20.0);

    let k = 2.0 / 4.0;
    assert_relative_eq!(values[3].expect("step"), (40.0 - seed) * k + seed);
}

#[test]
fn insufficient_data_yields_an_all_empty_sequence() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    for values in [sma(&bars, 3), sma(&bars, 20), ema(&bars, 3), rsi(&bars, 3)] {
        assert_eq!(values.len(), bars.len());
        assert!(values.iter().all(Option::is_none));
    }
}

#[test]
fn zero_period_degrades_to_empty_not_panic() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0]);
    assert!(sma(&bars, 0).iter().all(Option::is_none));
    assert!(ema(&bars, 0).iter().all(Option::is_none));
    assert!(rsi(&bars, 0).iter().all(Option::is_none));
}

#[test]
fn rsi_warm_up_is_one_full_period() {
    let bars = bars_from_closes(&[44.0, 44.5, 44.1, 44.9, 45.3, 45.0, 45.8, 46.2, 45.9, 46.5]);
    let values = rsi(&bars, 5);

    for value in &values[..5] {
        assert_eq!(*value, None);
    }
    assert!(values[5].is_some());
}

#[test]
fn rsi_saturates_at_100_for_monotonic_gains() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let values = rsi(&bars, 4);
    for value in values.iter().flatten() {
        assert_relative_eq!(*value, 100.0);
    }
}

#[test]
fn rsi_on_constant_prices_follows_the_zero_loss_rule() {
    let bars = bars_from_closes(&[50.0; 12]);
    let values = rsi(&bars, 4);
    assert!(values[..4].iter().all(Option::is_none));
    for value in values[4..].iter() {
        assert_relative_eq!(value.expect("defined after warm-up"), 100.0);
    }
}

#[test]
fn rsi_matches_wilder_reference_values() {
    let closes = [10.0, 11.0, 10.5, 11.5, 12.0, 11.0, 12.5];
    let bars = bars_from_closes(&closes);
    let values = rsi(&bars, 3);

    // Hand-computed: gains [1, 0, 1, 0.5, 0, 1.5], losses [0, 0.5, 0, 0, 1, 0].
    let mut avg_gain: f64 = (1.0 + 0.0 + 1.0) / 3.0;
    let mut avg_loss: f64 = (0.0 + 0.5 + 0.0) / 3.0;
    let expected3 = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
    assert_relative_eq!(values[3].expect("index 3"), expected3, epsilon = 1e-12);

    avg_gain = (avg_gain * 2.0 + 0.5) / 3.0;
    avg_loss = (avg_loss * 2.0 + 0.0) / 3.0;
    let expected4 = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
    assert_relative_eq!(values[4].expect("index 4"), expected4, epsilon = 1e-12);
}

#[test]
fn macd_histogram_is_macd_minus_signal_everywhere_defined() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1)
        .collect();
    let bars = bars_from_closes(&closes);
    let series = macd(&bars, 12, 26, 9);

    assert_eq!(series.macd.len(), bars.len());
    assert_eq!(series.signal.len(), bars.len());
    assert_eq!(series.histogram.len(), bars.len());

    let mut defined = 0;
    for i in 0..bars.len() {
        match (series.macd[i], series.signal[i], series.histogram[i]) {
            (Some(m), Some(s), Some(h)) => {
                assert_relative_eq!(h, m - s, epsilon = 1e-12);
                defined += 1;
            }
            (_, None, None) | (None, None, _) => {}
            other => panic!("inconsistent definedness at {i}: {other:?}"),
        }
    }
    assert!(defined > 0);
}

#[test]
fn macd_warm_up_is_dominated_by_slow_plus_signal() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let bars = bars_from_closes(&closes);
    let series = macd(&bars, 12, 26, 9);

    assert!(series.macd[24].is_none());
    assert!(series.macd[25].is_some());
    // Signal needs nine defined macd values: indexes 25..=33.
    assert!(series.signal[32].is_none());
    assert!(series.signal[33].is_some());
    assert!(series.histogram[33].is_some());
}

#[test]
fn bollinger_uses_population_standard_deviation() {
    let closes = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0, 6.0];
    let bars = bars_from_closes(&closes);
    let bands = bollinger(&bars, 8, 2.0);

    for i in 0..7 {
        assert_eq!(bands.center[i], None);
        assert_eq!(bands.upper[i], None);
        assert_eq!(bands.lower[i], None);
    }

    // First eight closes have mean 5 and population stddev 2.
    assert_relative_eq!(bands.center[7].expect("center"), 5.0);
    assert_relative_eq!(bands.upper[7].expect("upper"), 9.0);
    assert_relative_eq!(bands.lower[7].expect("lower"), 1.0);
}
