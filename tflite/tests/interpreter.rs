use graphpeek_tflite::prelude::*;
use graphpeek_tflite::tensors::builtin_name;
use proptest::prelude::*;

fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHPEEK_LOG").try_init();
}

fn tensor(name: &str, dims: &[i64], dt: DatumType) -> TensorInfo {
    TensorInfo::new(name.to_string(), Shape::from_signed(dims.iter().copied()), Some(dt))
}

fn node(name: &str, op: &str, inputs: &[&str], dims: &[i64], dt: DatumType) -> GraphNode {
    GraphNode::new(
        name.to_string(),
        op.to_string(),
        inputs.iter().map(|s| s.to_string()).collect(),
        vec![tensor(name, dims, dt)],
    )
}

/// A quantized detector head: one uint8 image in, boxes and scores out.
fn detector() -> Graph {
    let q = DatumType::U8;
    Graph::new(
        ModelFormat::FrozenGraph,
        vec![
            node("normalized_input_image_tensor", "Placeholder", &[], &[1, 300, 300, 3], q),
            node("FeatureExtractor/conv", "CONV_2D", &["normalized_input_image_tensor"], &[1, 19, 19, 32], q),
            node("BoxPredictor/boxes", "CONV_2D", &["FeatureExtractor/conv"], &[1, 1917, 4], q),
            node("BoxPredictor/scores", "LOGISTIC", &["FeatureExtractor/conv"], &[1, 1917, 91], DatumType::F32),
        ],
        Interface::Nodes,
    )
}

fn save(graph: &Graph) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detect.tflite");
    let file = std::fs::File::create(&path).unwrap();
    tflite().write(graph, file).unwrap();
    (dir, path)
}

#[test]
fn outputs_carry_their_tensor_index() {
    setup_test_logger();
    let (_dir, path) = save(&detector());
    let graph = tflite().graph_for_path(&path).unwrap();
    let report = introspect(&graph, Mode::Outputs).unwrap();
    assert_eq!(
        report.to_string(),
        "--> #2 BoxPredictor/boxes [1,1917,4] uint8\n--> #3 BoxPredictor/scores [1,1917,91] float32\n"
    );
}

#[test]
fn operators_are_the_nodes() {
    let (_dir, path) = save(&detector());
    let graph = tflite().graph_for_path(&path).unwrap();
    assert_eq!(
        list_all_node_names(&graph),
        vec!["FeatureExtractor/conv", "BoxPredictor/boxes", "BoxPredictor/scores"]
    );
    let report = introspect(&graph, Mode::AllNodes).unwrap();
    assert_eq!(report.len(), 3);
    assert!(report.to_string().starts_with("--> FeatureExtractor/conv\n"));
    assert_eq!(graph.nodes[2].op, builtin_name(14));
}

#[test]
fn inputs_are_not_listed() {
    let (_dir, path) = save(&detector());
    let graph = tflite().graph_for_path(&path).unwrap();
    let e = list_inputs(&graph).unwrap_err();
    assert!(matches!(
        IntrospectError::kind_of(&e),
        Some(IntrospectError::UnsupportedOperation { format: ModelFormat::Tflite, .. })
    ));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.tflite");
    let e = tflite().graph_for_path(&path).unwrap_err();
    assert_eq!(IntrospectError::kind_of(&e), Some(&IntrospectError::ArtifactNotFound(path)));
}

#[test]
fn truncated_file() {
    let (_dir, path) = save(&detector());
    let bytes = std::fs::read(&path).unwrap();
    let e = tflite().graph_for_read(&mut &bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(
        IntrospectError::kind_of(&e),
        Some(IntrospectError::DeserializationError { format: ModelFormat::Tflite, .. })
    ));
}

#[test]
fn frozen_graph_bytes_are_rejected() {
    let e = tflite().graph_for_read(&mut &b"\x0a\x07\x0a\x05input"[..]).unwrap_err();
    assert!(matches!(
        IntrospectError::kind_of(&e),
        Some(IntrospectError::DeserializationError { .. })
    ));
}

fn chain(len: usize) -> Graph {
    let mut nodes = vec![node("x", "Placeholder", &[], &[-1, 8], DatumType::F32)];
    for i in 0..len {
        let prev = nodes[i].name.clone();
        nodes.push(node(&format!("relu_{i}"), "RELU", &[prev.as_str()], &[-1, 8], DatumType::F32));
    }
    Graph::new(ModelFormat::FrozenGraph, nodes, Interface::Nodes)
}

proptest! {
    #[test]
    fn chains(len in 1usize..12) {
        let mut buf = vec![];
        tflite().write(&chain(len), &mut buf).unwrap();
        let graph = tflite().graph_for_read(&mut &*buf).unwrap();
        let names = list_all_node_names(&graph);
        let expected: Vec<String> = (0..len).map(|i| format!("relu_{i}")).collect();
        prop_assert_eq!(names, expected);
        let outputs = list_outputs(&graph).unwrap();
        prop_assert_eq!(outputs.len(), 1);
        prop_assert_eq!(outputs[0].index, Some(len));
        prop_assert_eq!(outputs[0].shape.to_string(), "[?,8]");
    }
}
