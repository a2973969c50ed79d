/// Immutable compile-time theme preset.
///
/// Fields are `&'static str` CSS colors; presets are pure value constructors
/// with no allocation. The mutable counterpart is
/// [`RuntimeTheme`](super::RuntimeTheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UITheme {
    pub name: &'static str,
    pub background: &'static str,
    pub candle_up_body: &'static str,
    pub candle_up_wick: &'static str,
    pub candle_down_body: &'static str,
    pub candle_down_wick: &'static str,
    pub accent: &'static str,
    pub grid: &'static str,
    pub text: &'static str,
}

impl UITheme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            name: "dark",
            background: "#131722",
            candle_up_body: "#26a69a",
            candle_up_wick: "#26a69a",
            candle_down_body: "#ef5350",
            candle_down_wick: "#ef5350",
            accent: "#2962ff",
            grid: "#2a2e39",
            text: "#d1d4dc",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            candle_up_body: "#26a69a",
            candle_up_wick: "#26a69a",
            candle_down_body: "#ef5350",
            candle_down_wick: "#ef5350",
            accent: "#2962ff",
            grid: "#e0e3eb",
            text: "#434651",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            name: "high_contrast",
            background: "#000000",
            candle_up_body: "#00ff00",
            candle_up_wick: "#00ff00",
            candle_down_body: "#ff0000",
            candle_down_wick: "#ff0000",
            accent: "#0066ff",
            grid: "#333333",
            text: "#ffffff",
        }
    }

    #[must_use]
    pub const fn cyberpunk() -> Self {
        Self {
            name: "cyberpunk",
            background: "#0a0a0f",
            candle_up_body: "#00fff5",
            candle_up_wick: "#00fff5",
            candle_down_body: "#e94560",
            candle_down_wick: "#e94560",
            accent: "#e94560",
            grid: "#1a1a2e",
            text: "#eaeaea",
        }
    }

    /// Looks up a preset by its catalog name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high_contrast" => Some(Self::high_contrast()),
            "cyberpunk" => Some(Self::cyberpunk()),
            _ => None,
        }
    }
}
