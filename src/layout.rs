//! Vertical panel partitioning.
//!
//! The main price panel takes the majority share of the drawable height;
//! each panel-requiring overlay (RSI, MACD) claims a fixed fraction below
//! it. Layout is computed in two explicit passes so the result does not
//! depend on traversal order: pass one collects the panel requests, pass
//! two assigns the bands.

use indexmap::IndexMap;

use crate::overlay::Overlay;

/// Vertical gap between stacked panels, in pixels.
pub const PANEL_GAP: f64 = 4.0;

/// One panel's vertical band within the drawable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBand {
    pub y_offset: f64,
    pub height: f64,
}

/// The computed stack: the main price panel plus one band per
/// panel-requiring overlay, keyed by that overlay's registration index.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub main: PanelBand,
    sub: IndexMap<usize, PanelBand>,
}

impl PanelLayout {
    #[must_use]
    pub fn compute(chart_height: f64, overlays: &[Overlay]) -> Self {
        let requests: Vec<(usize, f64)> = overlays
            .iter()
            .enumerate()
            .filter_map(|(index, overlay)| overlay.panel_ratio().map(|ratio| (index, ratio)))
            .collect();
        let sub_share: f64 = requests.iter().map(|(_, ratio)| ratio).sum();

        // The price panel keeps at least one pixel even when the sub-panel
        // shares would otherwise swallow the whole drawable height.
        let main_height = (chart_height * (1.0 - sub_share)).max(1.0_f64.min(chart_height));
        let main = PanelBand {
            y_offset: 0.0,
            height: main_height,
        };

        let mut sub = IndexMap::new();
        let mut cursor = main_height;
        for (index, ratio) in requests {
            let slot = chart_height * ratio;
            sub.insert(
                index,
                PanelBand {
                    y_offset: cursor + PANEL_GAP,
                    height: (slot - PANEL_GAP).max(0.0),
                },
            );
            cursor += slot;
        }

        Self { main, sub }
    }

    /// Band assigned to the overlay registered at `overlay_index`, if that
    /// overlay requested its own panel.
    #[must_use]
    pub fn sub_panel(&self, overlay_index: usize) -> Option<PanelBand> {
        self.sub.get(&overlay_index).copied()
    }

    #[must_use]
    pub fn sub_panel_count(&self) -> usize {
        self.sub.len()
    }
}
