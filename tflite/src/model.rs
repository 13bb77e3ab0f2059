use std::collections::HashMap;
use std::io::Read;

use flatbuffers::{FlatBufferBuilder, WIPOffset};
use graphpeek_core::internal::*;

use crate::tensors::{builtin_code, builtin_name, flat_tensor_to_info, tensor_type};
use crate::tflite::{
    self, Buffer, BufferArgs, BuiltinOperator, Model, ModelArgs, Operator, OperatorArgs,
    OperatorCode, OperatorCodeArgs, SubGraph, SubGraphArgs, Tensor, TensorArgs,
};

/// TFLite flatbuffer loader.
#[derive(Clone, Debug, Default)]
pub struct Tflite;

/// A verified TFLite flatbuffer.
#[derive(Clone, Debug)]
pub struct TfliteProtoModel(Vec<u8>);

impl TfliteProtoModel {
    pub fn new(buf: Vec<u8>) -> PeekResult<TfliteProtoModel> {
        if !tflite::model_buffer_has_identifier(&buf) {
            Err(IntrospectError::deserialization(
                ModelFormat::Tflite,
                format!("missing {:?} file identifier", tflite::MODEL_IDENTIFIER),
            ))?
        }
        tflite::root_as_model(&buf)
            .map_err(|e| IntrospectError::deserialization(ModelFormat::Tflite, e))
            .context("Verifying TFLite flatbuffer")?;
        Ok(TfliteProtoModel(buf))
    }

    pub fn root(&self) -> Model {
        unsafe { tflite::root_as_model_unchecked(&self.0) }
    }
}

fn invalid(reason: impl std::fmt::Display) -> PeekError {
    IntrospectError::deserialization(ModelFormat::Tflite, reason).into()
}

/// Inference engine handle over the main subgraph of a loaded model.
///
/// Tensor details are only available once `allocate_tensors` has checked every index
/// the subgraph refers to.
pub struct Interpreter<'m> {
    model: Model<'m>,
    subgraph: SubGraph<'m>,
    allocated: bool,
}

impl<'m> Interpreter<'m> {
    pub fn new(proto: &'m TfliteProtoModel) -> PeekResult<Interpreter<'m>> {
        let model = proto.root();
        let subgraph = model
            .subgraphs()
            .filter(|s| !s.is_empty())
            .map(|s| s.get(0))
            .ok_or_else(|| invalid("model has no subgraph"))?;
        debug!(
            "TFLite model version {}, main subgraph {:?}",
            model.version(),
            subgraph.name().unwrap_or("")
        );
        Ok(Interpreter { model, subgraph, allocated: false })
    }

    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    pub fn allocate_tensors(&mut self) -> PeekResult<()> {
        let tensor_count = self.subgraph.tensors().map(|t| t.len()).unwrap_or(0);
        let check = |what: &str, ix: i32, optional: bool| -> PeekResult<()> {
            if (optional && ix == -1) || (0..tensor_count as i64).contains(&(ix as i64)) {
                Ok(())
            } else {
                Err(invalid(format!(
                    "{what} refers to tensor {ix}, subgraph has {tensor_count} tensors"
                )))
            }
        };
        for ix in self.subgraph.inputs().iter().flat_map(|v| v.iter()) {
            check("subgraph input", ix, false)?;
        }
        for ix in self.subgraph.outputs().iter().flat_map(|v| v.iter()) {
            check("subgraph output", ix, false)?;
        }
        let opcode_count = self.model.operator_codes().map(|o| o.len()).unwrap_or(0);
        for (op_ix, op) in self.subgraph.operators().iter().flat_map(|v| v.iter()).enumerate() {
            if op.opcode_index() as usize >= opcode_count {
                Err(invalid(format!(
                    "operator #{op_ix} uses opcode {}, model has {opcode_count} operator codes",
                    op.opcode_index()
                )))?
            }
            for ix in op.inputs().iter().flat_map(|v| v.iter()) {
                check(&format!("operator #{op_ix} input"), ix, true)?;
            }
            for ix in op.outputs().iter().flat_map(|v| v.iter()) {
                check(&format!("operator #{op_ix} output"), ix, false)?;
            }
        }
        let buffer_count = self.model.buffers().map(|b| b.len()).unwrap_or(0);
        for (ix, tensor) in self.subgraph.tensors().iter().flat_map(|v| v.iter()).enumerate() {
            // buffer 0 is the empty sentinel, tolerated even when the table is missing
            let buffer = tensor.buffer() as usize;
            if buffer != 0 && buffer >= buffer_count {
                Err(invalid(format!(
                    "tensor #{ix} uses buffer {buffer}, model has {buffer_count} buffers"
                )))?
            }
        }
        self.allocated = true;
        trace!("Allocated {tensor_count} tensors");
        Ok(())
    }

    fn ensure_allocated(&self) -> PeekResult<()> {
        if !self.allocated {
            bail!("Interpreter tensors must be allocated first")
        }
        Ok(())
    }

    /// Details of the main subgraph outputs, carrying their tensor index.
    pub fn output_details(&self) -> PeekResult<Vec<TensorInfo>> {
        self.ensure_allocated()?;
        self.subgraph
            .outputs()
            .iter()
            .flat_map(|v| v.iter())
            .map(|ix| flat_tensor_to_info(&self.subgraph, ix))
            .collect()
    }

    /// Details of the main subgraph inputs, carrying their tensor index.
    pub fn input_details(&self) -> PeekResult<Vec<TensorInfo>> {
        self.ensure_allocated()?;
        self.subgraph
            .inputs()
            .iter()
            .flat_map(|v| v.iter())
            .map(|ix| flat_tensor_to_info(&self.subgraph, ix))
            .collect()
    }

    fn op_kind(&self, op: &Operator) -> PeekResult<String> {
        let codes = self.model.operator_codes().context("No operator codes in model")?;
        let code = codes.get(op.opcode_index() as usize);
        let builtin = (code.deprecated_builtin_code() as i32).max(code.builtin_code().0);
        if builtin == BuiltinOperator::CUSTOM.0 {
            Ok(code.custom_code().unwrap_or("CUSTOM").to_string())
        } else {
            Ok(builtin_name(builtin))
        }
    }

    /// The operators of the main subgraph, each named after its first output tensor.
    pub fn nodes(&self) -> PeekResult<Vec<GraphNode>> {
        self.ensure_allocated()?;
        let mut producers: HashMap<i32, String> = HashMap::new();
        let mut nodes = vec![];
        for (op_ix, op) in self.subgraph.operators().iter().flat_map(|v| v.iter()).enumerate() {
            let outputs = op
                .outputs()
                .iter()
                .flat_map(|v| v.iter())
                .map(|ix| flat_tensor_to_info(&self.subgraph, ix))
                .collect::<PeekResult<Vec<_>>>()?;
            let name = outputs.first().map(|o| o.name.clone()).unwrap_or_else(|| format!("op_{op_ix}"));
            let inputs = op
                .inputs()
                .iter()
                .flat_map(|v| v.iter())
                .filter_map(|ix| producers.get(&ix).cloned())
                .unique()
                .collect();
            for ix in op.outputs().iter().flat_map(|v| v.iter()) {
                producers.insert(ix, name.clone());
            }
            nodes.push(GraphNode::new(name, self.op_kind(&op)?, inputs, outputs));
        }
        Ok(nodes)
    }
}

impl Framework<TfliteProtoModel> for Tflite {
    fn format(&self) -> ModelFormat {
        ModelFormat::Tflite
    }

    fn proto_model_for_read(&self, reader: &mut dyn Read) -> PeekResult<TfliteProtoModel> {
        let mut buf = vec![];
        reader.read_to_end(&mut buf)?;
        TfliteProtoModel::new(buf)
    }

    fn graph_for_proto_model(&self, proto: &TfliteProtoModel) -> PeekResult<Graph> {
        let mut interpreter = Interpreter::new(proto)?;
        interpreter.allocate_tensors()?;
        let outputs = interpreter.output_details()?;
        let nodes = interpreter.nodes()?;
        Ok(Graph::new(ModelFormat::Tflite, nodes, Interface::Interpreter { outputs }))
    }
}

fn write_tensor<'f>(
    builder: &mut FlatBufferBuilder<'f>,
    tensors: &mut Vec<WIPOffset<Tensor<'f>>>,
    info: &TensorInfo,
) -> i32 {
    let (shape, shape_signature) = match info.shape.dims() {
        Some(dims) => {
            let signature = dims.iter().map(|d| d.map(|d| d as i32).unwrap_or(-1)).collect_vec();
            let shape = dims.iter().map(|d| d.map(|d| d as i32).unwrap_or(1)).collect_vec();
            let dynamic = dims.iter().any(|d| d.is_none());
            (
                Some(builder.create_vector(&shape)),
                if dynamic { Some(builder.create_vector(&signature)) } else { None },
            )
        }
        None => (None, None),
    };
    let name = builder.create_string(&info.name);
    let tensor = Tensor::create(
        builder,
        &TensorArgs {
            shape,
            type_: info.datum_type.map(tensor_type).unwrap_or_default(),
            buffer: 0,
            name: Some(name),
            is_variable: false,
            shape_signature,
            has_rank: info.shape.rank().is_some(),
        },
    );
    tensors.push(tensor);
    tensors.len() as i32 - 1
}

fn operator_code_index(op_codes: &mut Vec<String>, kind: &str) -> u32 {
    if let Some(found) = op_codes.iter().position(|op| op == kind) {
        found as u32
    } else {
        op_codes.push(kind.to_string());
        op_codes.len() as u32 - 1
    }
}

fn write_subgraph<'f>(
    builder: &mut FlatBufferBuilder<'f>,
    op_codes: &mut Vec<String>,
    graph: &Graph,
) -> PeekResult<WIPOffset<SubGraph<'f>>> {
    let mut tensors: Vec<WIPOffset<Tensor<'f>>> = vec![];
    let mut operators: Vec<WIPOffset<Operator<'f>>> = vec![];
    let mut tensor_ids: HashMap<&str, i32> = HashMap::new();
    let mut inputs = vec![];
    for node in &graph.nodes {
        let outputs = node
            .outputs
            .iter()
            .map(|info| {
                let id = write_tensor(builder, &mut tensors, info);
                tensor_ids.insert(&info.name, id);
                id
            })
            .collect_vec();
        if node.op == PLACEHOLDER {
            inputs.extend(outputs.first().copied());
            continue;
        }
        let op_inputs = node
            .inputs
            .iter()
            .filter_map(|producer| graph.node_by_name(producer))
            .filter_map(|producer| producer.outputs.first())
            .filter_map(|t| tensor_ids.get(&*t.name).copied())
            .collect_vec();
        let opcode_index = operator_code_index(op_codes, &node.op);
        let op_inputs = builder.create_vector(&op_inputs);
        let outputs = builder.create_vector(&outputs);
        let operator = Operator::create(
            builder,
            &OperatorArgs { opcode_index, inputs: Some(op_inputs), outputs: Some(outputs) },
        );
        operators.push(operator);
    }
    let outputs: Vec<i32> = match &graph.interface {
        Interface::Interpreter { outputs } => outputs
            .iter()
            .map(|o| {
                tensor_ids
                    .get(&*o.name)
                    .copied()
                    .with_context(|| format!("Output {} is not produced by any node", o.name))
            })
            .collect::<PeekResult<_>>()?,
        _ => graph
            .sinks()
            .filter_map(|n| n.outputs.first())
            .filter_map(|t| tensor_ids.get(&*t.name).copied())
            .collect(),
    };

    let inputs = builder.create_vector(&inputs);
    let outputs = builder.create_vector(&outputs);
    let tensors = builder.create_vector(&tensors);
    let operators = builder.create_vector(&operators);
    let name = builder.create_string("main");

    Ok(SubGraph::create(
        builder,
        &SubGraphArgs {
            tensors: Some(tensors),
            inputs: Some(inputs),
            outputs: Some(outputs),
            operators: Some(operators),
            name: Some(name),
        },
    ))
}

fn write_model(graph: &Graph) -> PeekResult<FlatBufferBuilder<'static>> {
    let mut builder = FlatBufferBuilder::new();
    let mut op_codes = vec![];
    let subgraph = write_subgraph(&mut builder, &mut op_codes, graph)?;
    let subgraphs = builder.create_vector(&[subgraph]);
    let sentinel = Buffer::create(&mut builder, &BufferArgs { data: None });
    let buffers = builder.create_vector(&[sentinel]);
    let operator_codes = op_codes
        .iter()
        .map(|kind| {
            let (code, custom_code) = match builtin_code(kind) {
                Some(code) => (code, None),
                None => (BuiltinOperator::CUSTOM.0, Some(builder.create_string(kind))),
            };
            OperatorCode::create(
                &mut builder,
                &OperatorCodeArgs {
                    deprecated_builtin_code: code.min(
                        BuiltinOperator::PLACEHOLDER_FOR_GREATER_OP_CODES.0,
                    ) as i8,
                    custom_code,
                    version: 1,
                    builtin_code: BuiltinOperator(code),
                },
            )
        })
        .collect_vec();
    let operator_codes = builder.create_vector(&operator_codes);
    let description = builder.create_string("graphpeek");
    let model = Model::create(
        &mut builder,
        &ModelArgs {
            version: 3,
            operator_codes: Some(operator_codes),
            subgraphs: Some(subgraphs),
            description: Some(description),
            buffers: Some(buffers),
        },
    );
    tflite::finish_model_buffer(&mut builder, model);
    Ok(builder)
}

impl Tflite {
    /// Serialize a graph as a single subgraph TFLite model.
    ///
    /// Placeholder nodes become subgraph inputs, every other node an operator. Outputs
    /// are the interpreter outputs when the graph has some, its sinks otherwise.
    pub fn write(&self, graph: &Graph, mut w: impl std::io::Write) -> PeekResult<()> {
        let builder = write_model(graph)?;
        w.write_all(builder.finished_data())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn t(name: &str, dims: &[i64], dt: DatumType) -> TensorInfo {
        TensorInfo::new(name.to_string(), Shape::from_signed(dims.iter().copied()), Some(dt))
    }

    fn classifier() -> Graph {
        Graph::new(
            ModelFormat::FrozenGraph,
            vec![
                GraphNode::new("image".into(), PLACEHOLDER.into(), vec![], vec![t("image", &[-1, 4], DatumType::F32)]),
                GraphNode::new("logits".into(), "FULLY_CONNECTED".into(), vec!["image".into()], vec![t("logits", &[-1, 2], DatumType::F32)]),
                GraphNode::new("probs".into(), "SOFTMAX".into(), vec!["logits".into()], vec![t("probs", &[-1, 2], DatumType::F32)]),
            ],
            Interface::Nodes,
        )
    }

    fn proto(graph: &Graph) -> TfliteProtoModel {
        let mut buf = vec![];
        Tflite.write(graph, &mut buf).unwrap();
        TfliteProtoModel::new(buf).unwrap()
    }

    #[test]
    fn details_need_allocation() {
        crate::setup_test_logger();
        let proto = proto(&classifier());
        let mut interpreter = Interpreter::new(&proto).unwrap();
        assert!(interpreter.output_details().is_err());
        interpreter.allocate_tensors().unwrap();
        assert!(interpreter.is_allocated());
        let outputs = interpreter.output_details().unwrap();
        assert_eq!(outputs, vec![t("probs", &[-1, 2], DatumType::F32).with_index(2)]);
        let inputs = interpreter.input_details().unwrap();
        assert_eq!(inputs, vec![t("image", &[-1, 4], DatumType::F32).with_index(0)]);
    }

    #[test]
    fn operators_as_nodes() {
        let proto = proto(&classifier());
        let mut interpreter = Interpreter::new(&proto).unwrap();
        interpreter.allocate_tensors().unwrap();
        let nodes = interpreter.nodes().unwrap();
        assert_eq!(nodes.iter().map(|n| &*n.name).collect_vec(), vec!["logits", "probs"]);
        assert_eq!(nodes[0].op, "FULLY_CONNECTED");
        assert!(nodes[0].inputs.is_empty());
        assert_eq!(nodes[1].inputs, vec!["logits".to_string()]);
    }

    #[test]
    fn custom_ops_keep_their_code() {
        let mut graph = classifier();
        graph.nodes[2].op = "TFLite_Detection_PostProcess".into();
        let graph = Tflite.graph_for_proto_model(&proto(&graph)).unwrap();
        assert_eq!(graph.nodes[1].op, "TFLite_Detection_PostProcess");
    }

    #[test]
    fn missing_identifier() {
        let e = TfliteProtoModel::new(vec![0u8; 32]).unwrap_err();
        assert!(matches!(
            IntrospectError::kind_of(&e),
            Some(IntrospectError::DeserializationError { format: ModelFormat::Tflite, .. })
        ));
    }

    #[test]
    fn dangling_output_index() {
        let mut builder = FlatBufferBuilder::new();
        let no_tensors: Vec<WIPOffset<Tensor>> = vec![];
        let tensors = builder.create_vector(&no_tensors);
        let outputs = builder.create_vector(&[3i32]);
        let subgraph = SubGraph::create(
            &mut builder,
            &SubGraphArgs {
                tensors: Some(tensors),
                inputs: None,
                outputs: Some(outputs),
                operators: None,
                name: None,
            },
        );
        let subgraphs = builder.create_vector(&[subgraph]);
        let model = Model::create(
            &mut builder,
            &ModelArgs {
                version: 3,
                operator_codes: None,
                subgraphs: Some(subgraphs),
                description: None,
                buffers: None,
            },
        );
        tflite::finish_model_buffer(&mut builder, model);
        let proto = TfliteProtoModel::new(builder.finished_data().to_vec()).unwrap();
        let mut interpreter = Interpreter::new(&proto).unwrap();
        let e = interpreter.allocate_tensors().unwrap_err();
        assert!(e.to_string().contains("subgraph output refers to tensor 3"));
        assert!(!interpreter.is_allocated());
    }
}
