pub mod color;
pub mod round;

pub use color::{color_scale, value_range, RgbColor};
pub use round::round_to;
