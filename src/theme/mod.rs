//! Theme presets and the mutable runtime theme.

pub mod presets;
pub mod runtime;

pub use presets::UITheme;
pub use runtime::RuntimeTheme;
