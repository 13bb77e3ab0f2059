#[macro_use]
extern crate log;

pub mod display_params;
pub mod model;

pub use display_params::DisplayParams;
pub use model::{ModelParams, guess_format, load};
