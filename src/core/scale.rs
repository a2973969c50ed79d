use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale from an observed value range, widening degenerate
    /// ranges (all values equal) to a unit span around the value so mapping
    /// never divides by zero.
    pub fn fitted(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }

        if min == max {
            return Self::new(min - 0.5, max + 0.5);
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value onto `[0, span_px]`.
    #[must_use]
    pub fn to_pixel(self, value: f64, span_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        normalized * span_px
    }

    /// Maps a domain value onto `[span_px, 0]`: higher values get smaller
    /// pixel offsets, matching screen y-coordinates.
    #[must_use]
    pub fn to_pixel_inverted(self, value: f64, span_px: f64) -> f64 {
        span_px - self.to_pixel(value, span_px)
    }

    /// Inverse of [`LinearScale::to_pixel`].
    #[must_use]
    pub fn to_domain(self, pixel: f64, span_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.domain_start + (pixel / span_px) * span
    }
}
