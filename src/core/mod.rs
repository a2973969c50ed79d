pub mod bar;
pub mod candles;
pub mod scale;
pub mod viewport;

pub use bar::{Bar, price_range};
pub use candles::{CandleGeometry, project_candles};
pub use scale::LinearScale;
pub use viewport::{PRICE_AXIS_WIDTH, TIME_AXIS_HEIGHT, Viewport};
