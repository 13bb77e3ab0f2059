use std::fmt;
use std::str::FromStr;

use crate::datum::DatumType;
use crate::errors::PeekResult;
use crate::shape::Shape;

/// The serialized model formats graphpeek knows how to open.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// A single binary `GraphDef` with weights folded in as constants.
    FrozenGraph,
    /// A directory holding `saved_model.pb` and named signatures.
    SavedModel,
    /// A TFLite flatbuffer.
    Tflite,
}

impl ModelFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ModelFormat::FrozenGraph => "frozen-graph",
            ModelFormat::SavedModel => "saved-model",
            ModelFormat::Tflite => "tflite",
        }
    }

    pub fn variants() -> &'static [&'static str] {
        &["frozen-graph", "saved-model", "quantized-inference", "tflite"]
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelFormat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> PeekResult<ModelFormat> {
        match s {
            "frozen-graph" => Ok(ModelFormat::FrozenGraph),
            "saved-model" => Ok(ModelFormat::SavedModel),
            "tflite" | "quantized-inference" => Ok(ModelFormat::Tflite),
            _ => anyhow::bail!(
                "Unknown model format {:?}, expected one of {:?}",
                s,
                ModelFormat::variants()
            ),
        }
    }
}

/// Declared facts about one tensor.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TensorInfo {
    pub name: String,
    pub shape: Shape,
    pub datum_type: Option<DatumType>,
    /// Position of the tensor in the loader's own tensor table, when it has one.
    #[new(default)]
    pub index: Option<usize>,
}

impl TensorInfo {
    pub fn with_index(self, index: usize) -> TensorInfo {
        TensorInfo { index: Some(index), ..self }
    }
}

/// One computation step of a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct GraphNode {
    pub name: String,
    pub op: String,
    /// Names of the nodes this one consumes, in declaration order.
    pub inputs: Vec<String>,
    pub outputs: Vec<TensorInfo>,
}

/// How a model declares its interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interface {
    /// Nothing declared: inputs are the placeholder nodes, outputs are read off the nodes.
    Nodes,
    /// A saved-model signature.
    Signature { key: String, inputs: Vec<TensorInfo> },
    /// A fixed output list exposed by an inference engine once its tensors are allocated.
    Interpreter { outputs: Vec<TensorInfo> },
}

/// A deserialized model, as seen by the introspection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub format: ModelFormat,
    pub nodes: Vec<GraphNode>,
    pub interface: Interface,
}

impl Graph {
    pub fn new(format: ModelFormat, nodes: Vec<GraphNode>, interface: Interface) -> Graph {
        Graph { format, nodes, interface }
    }

    pub fn node_by_name(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Nodes that no other node consumes.
    pub fn sinks(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes
            .iter()
            .filter(|n| !self.nodes.iter().any(|other| other.inputs.iter().any(|i| *i == n.name)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_names_roundtrip() {
        for name in ModelFormat::variants() {
            let format = name.parse::<ModelFormat>().unwrap();
            assert_eq!(format.name().parse::<ModelFormat>().unwrap(), format);
        }
        assert_eq!("quantized-inference".parse::<ModelFormat>().unwrap(), ModelFormat::Tflite);
        assert!("pb".parse::<ModelFormat>().is_err());
        assert!("onnx".parse::<ModelFormat>().is_err());
    }

    #[test]
    fn sinks() {
        let t = |n: &str| TensorInfo::new(n.to_string(), Shape::unknown(), None);
        let graph = Graph::new(
            ModelFormat::FrozenGraph,
            vec![
                GraphNode::new("a".into(), "Placeholder".into(), vec![], vec![t("a")]),
                GraphNode::new("b".into(), "Relu".into(), vec!["a".into()], vec![t("b")]),
                GraphNode::new("c".into(), "Relu".into(), vec!["a".into()], vec![t("c")]),
            ],
            Interface::Nodes,
        );
        let sinks: Vec<&str> = graph.sinks().map(|n| &*n.name).collect();
        assert_eq!(sinks, vec!["b", "c"]);
        assert!(graph.node_by_name("b").is_some());
        assert!(graph.node_by_name("z").is_none());
    }
}
