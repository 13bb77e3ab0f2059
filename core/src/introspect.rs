//! The introspection operations.
//!
//! They only read a [`Graph`]: the format specific work happened at load time.

use std::fmt;
use std::str::FromStr;

use crate::errors::{IntrospectError, PeekResult};
use crate::model::{Graph, Interface, TensorInfo};
use crate::report::{IntrospectionReport, ReportRow, Role};

/// Op name of graph input nodes in TensorFlow graphs.
pub const PLACEHOLDER: &str = "Placeholder";

/// What to list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Inputs,
    Outputs,
    AllNodes,
}

impl Mode {
    pub fn variants() -> &'static [&'static str] {
        &["inputs", "outputs", "all-nodes"]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Inputs => "inputs",
            Mode::Outputs => "outputs",
            Mode::AllNodes => "all-nodes",
        })
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> PeekResult<Mode> {
        match s {
            "inputs" => Ok(Mode::Inputs),
            "outputs" => Ok(Mode::Outputs),
            "all-nodes" => Ok(Mode::AllNodes),
            _ => anyhow::bail!("Unknown mode {:?}, expected one of {:?}", s, Mode::variants()),
        }
    }
}

/// Graph inputs, in declaration order.
pub fn list_inputs(graph: &Graph) -> PeekResult<Vec<&TensorInfo>> {
    match &graph.interface {
        Interface::Nodes => Ok(graph
            .nodes
            .iter()
            .filter(|n| n.op == PLACEHOLDER)
            .filter_map(|n| n.outputs.first())
            .collect()),
        Interface::Signature { inputs, .. } => Ok(inputs.iter().collect()),
        Interface::Interpreter { .. } => Err(IntrospectError::UnsupportedOperation {
            format: graph.format,
            operation: "inputs",
        })?,
    }
}

/// Graph outputs, in declaration order.
///
/// Without a declared output list this is the first output of every node producing
/// one, so intermediate tensors show up next to the actual sinks.
pub fn list_outputs(graph: &Graph) -> PeekResult<Vec<&TensorInfo>> {
    match &graph.interface {
        Interface::Nodes => Ok(graph.nodes.iter().filter_map(|n| n.outputs.first()).collect()),
        Interface::Interpreter { outputs } => Ok(outputs.iter().collect()),
        Interface::Signature { .. } => Err(IntrospectError::UnsupportedOperation {
            format: graph.format,
            operation: "outputs",
        })?,
    }
}

pub fn list_all_node_names(graph: &Graph) -> Vec<&str> {
    graph.nodes.iter().map(|n| &*n.name).collect()
}

/// Run the operation selected by `mode` and collect its result as report rows.
pub fn introspect(graph: &Graph, mode: Mode) -> PeekResult<IntrospectionReport> {
    let rows = match mode {
        Mode::Inputs => {
            list_inputs(graph)?.into_iter().map(|t| ReportRow::tensor(Role::Input, t)).collect()
        }
        Mode::Outputs => {
            list_outputs(graph)?.into_iter().map(|t| ReportRow::tensor(Role::Output, t)).collect()
        }
        Mode::AllNodes => list_all_node_names(graph).into_iter().map(ReportRow::node).collect(),
    };
    let report = IntrospectionReport { rows };
    debug!("{} on {} graph: {} row(s)", mode, graph.format, report.len());
    Ok(report)
}
