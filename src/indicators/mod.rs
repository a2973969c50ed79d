//! Pure indicator math over bar series.
//!
//! Every function is a pure mapping `(bars, parameters) -> aligned sequence`
//! with one entry per input bar. Warm-up entries (insufficient trailing
//! history) are `None`; downstream rendering treats them as gaps, never as
//! zeroes. Data insufficiency (`period >= bar count`) degrades to an
//! all-`None` sequence rather than an error.

pub mod bands;
pub mod moving_average;
pub mod oscillators;

pub use bands::{BollingerBands, bollinger};
pub use moving_average::{ema, sma};
pub use oscillators::{MacdSeries, macd, rsi};
