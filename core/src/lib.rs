//! # graphpeek core
//!
//! Format independent view of a serialized neural network model, and the operations
//! listing its inputs, outputs and nodes.
//!
//! ```
//! use graphpeek_core::prelude::*;
//!
//! let input = TensorInfo::new("input_1".into(), Shape::concrete(&[1, 256, 256, 3]), Some(DatumType::F32));
//! let graph = Graph::new(
//!     ModelFormat::FrozenGraph,
//!     vec![GraphNode::new("input_1".into(), "Placeholder".into(), vec![], vec![input])],
//!     Interface::Nodes,
//! );
//! let report = introspect(&graph, Mode::Inputs).unwrap();
//! assert_eq!(report.to_string(), "--> input_1 [1,256,256,3] float32\n");
//! ```

#[macro_use]
extern crate derive_new;
#[allow(unused_imports)]
#[macro_use]
extern crate log;

pub mod datum;
pub mod errors;
pub mod framework;
pub mod introspect;
pub mod model;
pub mod report;
pub mod shape;

pub use anyhow;

pub mod prelude {
    pub use crate::datum::DatumType;
    pub use crate::errors::{IntrospectError, PeekError, PeekResult};
    pub use crate::framework::Framework;
    pub use crate::introspect::{Mode, introspect, list_all_node_names, list_inputs, list_outputs};
    pub use crate::model::{Graph, GraphNode, Interface, ModelFormat, TensorInfo};
    pub use crate::report::{IntrospectionReport, ReportRow, Role};
    pub use crate::shape::Shape;
}

pub mod internal {
    pub use crate::errors::ensure_exists;
    pub use crate::introspect::PLACEHOLDER;
    pub use crate::prelude::*;
    pub use anyhow::{Context, bail, format_err};
    pub use itertools::Itertools;
}

#[cfg(test)]
fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHPEEK_LOG").try_init();
}
