use std::path::Path;

use graphpeek_core::prelude::*;
use graphpeek_libcli::{DisplayParams, ModelParams, load};
use graphpeek_tensorflow::tfpb;
use graphpeek_tensorflow::tfpb::tensorflow::DataType;

fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("GRAPHPEEK_LOG").try_init();
}

fn frozen(path: &Path) {
    tfpb::graph()
        .node(tfpb::placeholder("input_1", DataType::DtFloat, &[1, 256, 256, 3]))
        .node(tfpb::node().name("Identity").op("Identity").input("input_1").attr("T", DataType::DtFloat))
        .save_to(path)
        .unwrap();
}

fn saved(dir: &Path) {
    let signature = tfpb::signature().input(
        "input_1",
        tfpb::tensor_info("serving_default_input_1:0", DataType::DtFloat, tfpb::shape(&[1, 256, 256, 3])),
    );
    tfpb::saved_model(vec![tfpb::meta_graph(&["serve"], tfpb::graph()).signature("serving_default", signature)])
        .save_to_dir(dir)
        .unwrap();
}

fn tflite(path: &Path) {
    let input = TensorInfo::new("input".into(), Shape::concrete(&[1, 4]), Some(DatumType::F32));
    let output = TensorInfo::new("output".into(), Shape::concrete(&[1, 2]), Some(DatumType::F32));
    let graph = Graph::new(
        ModelFormat::FrozenGraph,
        vec![
            GraphNode::new("input".into(), "Placeholder".into(), vec![], vec![input]),
            GraphNode::new("output".into(), "FULLY_CONNECTED".into(), vec!["input".into()], vec![output]),
        ],
        Interface::Nodes,
    );
    graphpeek_tflite::tflite().write(&graph, std::fs::File::create(path).unwrap()).unwrap();
}

fn run(path: &Path, params: &ModelParams, mode: Mode) -> PeekResult<String> {
    let graph = load(path, params)?;
    DisplayParams::default().render(&introspect(&graph, mode)?)
}

#[test]
fn each_format_by_its_path() {
    setup_test_logger();
    let dir = tempfile::tempdir().unwrap();
    let params = ModelParams::default();

    let pb = dir.path().join("model_float32.pb");
    frozen(&pb);
    assert_eq!(run(&pb, &params, Mode::Inputs).unwrap(), "--> input_1 [1,256,256,3] float32\n");

    let sm = dir.path().join("blazepose");
    std::fs::create_dir(&sm).unwrap();
    saved(&sm);
    assert_eq!(run(&sm, &params, Mode::Inputs).unwrap(), "--> input_1 [1,256,256,3] float32\n");

    let tfl = dir.path().join("model.tflite");
    tflite(&tfl);
    assert_eq!(run(&tfl, &params, Mode::Outputs).unwrap(), "--> #1 output [1,2] float32\n");
}

#[test]
fn forced_format_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.tflite");
    frozen(&path);
    let graph = load(&path, &ModelParams::default().with_format(ModelFormat::FrozenGraph)).unwrap();
    assert_eq!(list_all_node_names(&graph), vec!["input_1", "Identity"]);

    let e = load(&path, &ModelParams::default()).unwrap_err();
    assert_eq!(IntrospectError::kind_of(&e).map(|k| k.exit_code()), Some(3));
}

#[test]
fn other_signature() {
    let dir = tempfile::tempdir().unwrap();
    saved(dir.path());
    let params = ModelParams { signature: "predict".into(), ..ModelParams::default() };
    let e = load(dir.path(), &params).unwrap_err();
    assert!(matches!(
        IntrospectError::kind_of(&e),
        Some(IntrospectError::SignatureNotFound { key, .. }) if key == "predict"
    ));
}

#[test]
fn reports_are_stable() {
    let dir = tempfile::tempdir().unwrap();
    let pb = dir.path().join("model_float32.pb");
    frozen(&pb);
    let params = ModelParams::default();
    for mode in [Mode::Inputs, Mode::Outputs, Mode::AllNodes] {
        assert_eq!(run(&pb, &params, mode).unwrap(), run(&pb, &params, mode).unwrap());
    }
}
