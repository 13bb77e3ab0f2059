//! # graphpeek TensorFlow loaders
//!
//! Frozen graphs (a single `GraphDef` protobuf) and saved models (a directory holding
//! `saved_model.pb`).
//!
//! ```no_run
//! use graphpeek_tensorflow::prelude::*;
//!
//! let graph = tensorflow().graph_for_path("model_float32.pb".as_ref()).unwrap();
//! for input in list_inputs(&graph).unwrap() {
//!     println!("--> {} {} {:?}", input.name, input.shape, input.datum_type);
//! }
//! ```

#[allow(unused_imports)]
#[macro_use]
extern crate log;

pub mod model;
pub mod saved_model;
pub mod tensor;
pub mod tfpb;

pub use model::Tensorflow;
pub use saved_model::SavedModel;

/// The frozen graph loader.
pub fn tensorflow() -> Tensorflow {
    Tensorflow
}

/// The saved model loader, for the default signature and tags.
pub fn saved_model() -> SavedModel {
    SavedModel::default()
}

pub use graphpeek_core;
pub mod prelude {
    pub use crate::{saved_model, tensorflow};
    pub use graphpeek_core::prelude::*;
}
