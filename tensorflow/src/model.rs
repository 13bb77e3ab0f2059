use std::io::Read;

use graphpeek_core::internal::*;
use prost::Message;

use crate::tfpb::tensorflow::{GraphDef, NodeDef};

/// Ops that only have side effects and produce no tensor.
const NO_OUTPUT_OPS: &[&str] = &[
    "NoOp",
    "Assert",
    "PrintV2",
    "Save",
    "SaveV2",
    "SaveSlices",
    "RestoreV2",
    "MergeV2Checkpoints",
    "AssignVariableOp",
    "AssignAddVariableOp",
    "AssignSubVariableOp",
    "DestroyResourceOp",
    "ControlTrigger",
    "WriteScalarSummary",
    "WriteHistogramSummary",
    "WriteImageSummary",
    "WriteAudioSummary",
    "WriteSummary",
    "FlushSummaryWriter",
    "CloseSummaryWriter",
];

/// Attributes carrying the output type, by order of preference.
/// `T` comes last as it is often the input type (`Shape`, `Cast`...).
const TYPE_ATTRS: &[&str] = &["dtype", "out_type", "DstT", "Tout", "T"];

/// Frozen graph loader: a single serialized `GraphDef`.
#[derive(Clone, Debug, Default)]
pub struct Tensorflow;

impl Tensorflow {
    pub fn graph_def_for_bytes(&self, bytes: &[u8]) -> PeekResult<GraphDef> {
        GraphDef::decode(bytes)
            .map_err(|e| IntrospectError::deserialization(ModelFormat::FrozenGraph, e))
            .context("Decoding GraphDef")
    }
}

impl Framework<GraphDef> for Tensorflow {
    fn format(&self) -> ModelFormat {
        ModelFormat::FrozenGraph
    }

    fn proto_model_for_read(&self, r: &mut dyn Read) -> PeekResult<GraphDef> {
        let mut v = vec![];
        r.read_to_end(&mut v)?;
        self.graph_def_for_bytes(&v)
    }

    fn graph_for_proto_model(&self, graph: &GraphDef) -> PeekResult<Graph> {
        if let Some(versions) = &graph.versions {
            debug!("GraphDef produced by version {}", versions.producer);
        }
        Ok(Graph::new(ModelFormat::FrozenGraph, graph_nodes(graph)?, Interface::Nodes))
    }
}

/// Translate every node of a `GraphDef`, keeping declaration order.
pub fn graph_nodes(graph: &GraphDef) -> PeekResult<Vec<GraphNode>> {
    graph.node.iter().map(translate_node).collect()
}

fn translate_node(pbnode: &NodeDef) -> PeekResult<GraphNode> {
    let inputs = pbnode.input.iter().map(|i| producer_name(i).to_string()).collect();
    let outputs = output_tensors(pbnode)
        .with_context(|| format!("Reading outputs of node {} ({})", pbnode.name, pbnode.op))?;
    Ok(GraphNode::new(pbnode.name.clone(), pbnode.op.clone(), inputs, outputs))
}

/// Name of the node feeding an input.
///
/// From node_def.proto: each input is "node:src_output", the ":0" suffix may be
/// omitted, and control inputs have the form "^node".
pub fn producer_name(input: &str) -> &str {
    let input = input.strip_prefix('^').unwrap_or(input);
    input.split(':').next().unwrap_or(input)
}

fn output_tensors(pbnode: &NodeDef) -> PeekResult<Vec<TensorInfo>> {
    let mut datum_type = None;
    for attr in TYPE_ATTRS {
        match pbnode.get_attr_opt_datum_type(attr) {
            Ok(None) => continue,
            Ok(dt) => datum_type = dt,
            Err(e) => warn!("{e:#}, reporting an unknown type"),
        }
        break;
    }
    let shapes = if let Some(shapes) = pbnode.get_attr_opt_list_shape("_output_shapes") {
        shapes
    } else if NO_OUTPUT_OPS.contains(&&*pbnode.op) {
        vec![]
    } else if let Some(shape) = pbnode.get_attr_opt_shape("shape") {
        vec![shape]
    } else if let Some(value) = pbnode.get_attr_opt_tensor("value") {
        vec![value.tensor_shape.as_ref().map(Shape::from).unwrap_or_else(Shape::unknown)]
    } else {
        vec![Shape::unknown()]
    };
    // Placeholders carry their declared shape in `shape`, which wins over what
    // shape inference wrote when the graph was frozen.
    let declared = pbnode.get_attr_opt_shape("shape");
    Ok(shapes
        .into_iter()
        .enumerate()
        .map(|(slot, inferred)| {
            let shape = match (&declared, slot) {
                (Some(declared), 0) if pbnode.op == PLACEHOLDER => declared.clone(),
                _ => inferred,
            };
            TensorInfo::new(tensor_name(&pbnode.name, slot), shape, datum_type)
        })
        .collect())
}

fn tensor_name(node: &str, slot: usize) -> String {
    if slot == 0 { node.to_string() } else { format!("{node}:{slot}") }
}
