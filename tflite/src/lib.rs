//! # graphpeek TFLite loader
//!
//! Reads `TFL3` flatbuffers. Outputs come from an [`Interpreter`] handle once its
//! tensors are allocated; nodes are the operators of the main subgraph.

#[allow(unused_imports)]
#[macro_use]
extern crate log;

pub mod model;
pub mod tensors;
#[allow(unsafe_op_in_unsafe_fn, clippy::all)]
mod tflite_generated;

pub use model::{Interpreter, Tflite, TfliteProtoModel};
pub use tflite_generated::tflite;

pub fn tflite() -> Tflite {
    Tflite
}

pub use graphpeek_core;
pub mod prelude {
    pub use crate::tflite;
    pub use graphpeek_core::prelude::*;
}

#[cfg(test)]
fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHPEEK_LOG").try_init();
}
