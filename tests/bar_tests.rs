use candlekit::Bar;

#[test]
fn bullish_is_strictly_close_above_open() {
    let bar = Bar::new(1_700_000_000, 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
    assert!(bar.is_bullish());

    let flat = Bar::new(1_700_000_000, 100.0, 105.0, 98.0, 100.0, 1_000_000.0);
    assert!(!flat.is_bullish());

    let bearish = Bar::new(1_700_000_000, 103.0, 105.0, 98.0, 100.0, 1_000_000.0);
    assert!(!bearish.is_bullish());
}

#[test]
fn plain_constructor_does_not_enforce_ohlc_envelope() {
    // Inconsistent bars are the caller's problem visually, never a panic.
    let bar = Bar::new(0, 100.0, 90.0, 110.0, 100.0, 0.0);
    assert_eq!(bar.high, 90.0);
}

#[test]
fn validated_rejects_non_finite_and_inverted_bars() {
    assert!(Bar::validated(0, f64::NAN, 105.0, 98.0, 103.0, 0.0).is_err());
    assert!(Bar::validated(0, 100.0, 98.0, 105.0, 103.0, 0.0).is_err());
    assert!(Bar::validated(0, 120.0, 105.0, 98.0, 103.0, 0.0).is_err());
    assert!(Bar::validated(0, 100.0, 105.0, 98.0, 103.0, 1.0).is_ok());
}

#[test]
fn price_range_spans_lows_and_highs() {
    let bars = vec![
        Bar::new(0, 100.0, 105.0, 98.0, 103.0, 1.0),
        Bar::new(60, 103.0, 110.0, 101.0, 108.0, 1.0),
        Bar::new(120, 108.0, 109.0, 95.0, 97.0, 1.0),
    ];
    assert_eq!(candlekit::core::price_range(&bars), Some((95.0, 110.0)));
    assert_eq!(candlekit::core::price_range(&[]), None);
}
