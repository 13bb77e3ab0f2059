use graphpeek_tensorflow::prelude::*;
use graphpeek_tensorflow::tfpb;
use graphpeek_tensorflow::tfpb::tensorflow::DataType;

fn blazepose_like() -> tfpb::tensorflow::SavedModel {
    let graph_def = tfpb::graph()
        .node(tfpb::placeholder("serving_default_input_1", DataType::DtFloat, &[1, 256, 256, 3]))
        .node(tfpb::node().name("model/conv").op("Conv2D").input("serving_default_input_1"))
        .node(tfpb::node().name("StatefulPartitionedCall").op("Identity").input("model/conv"));
    let signature = tfpb::signature()
        .input(
            "input_1",
            tfpb::tensor_info(
                "serving_default_input_1:0",
                DataType::DtFloat,
                tfpb::shape(&[1, 256, 256, 3]),
            ),
        )
        .input("mask", tfpb::tensor_info("serving_default_mask:0", DataType::DtInt32, tfpb::shape(&[-1])))
        .output("Identity", tfpb::tensor_info("StatefulPartitionedCall:0", DataType::DtFloat, tfpb::unknown_rank()));
    tfpb::saved_model(vec![tfpb::meta_graph(&["serve"], graph_def).signature("serving_default", signature)])
}

#[test]
fn signature_inputs_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    blazepose_like().save_to_dir(dir.path()).unwrap();
    let graph = saved_model().graph_for_path(dir.path()).unwrap();
    let report = introspect(&graph, Mode::Inputs).unwrap();
    assert_eq!(report.to_string(), "--> input_1 [1,256,256,3] float32\n--> mask [?] int32\n");
}

#[test]
fn proto_file_can_be_given_directly() {
    let dir = tempfile::tempdir().unwrap();
    blazepose_like().save_to_dir(dir.path()).unwrap();
    let graph = saved_model().graph_for_path(&dir.path().join("saved_model.pb")).unwrap();
    assert_eq!(list_inputs(&graph).unwrap().len(), 2);
}

#[test]
fn nodes_come_from_the_meta_graph() {
    let bytes = blazepose_like().write_to_bytes().unwrap();
    let graph = saved_model().graph_for_read(&mut &*bytes).unwrap();
    assert_eq!(
        list_all_node_names(&graph),
        vec!["serving_default_input_1", "model/conv", "StatefulPartitionedCall"]
    );
}

#[test]
fn outputs_are_not_supported() {
    let bytes = blazepose_like().write_to_bytes().unwrap();
    let graph = saved_model().graph_for_read(&mut &*bytes).unwrap();
    let e = introspect(&graph, Mode::Outputs).unwrap_err();
    assert!(matches!(
        IntrospectError::kind_of(&e),
        Some(IntrospectError::UnsupportedOperation { format: ModelFormat::SavedModel, .. })
    ));
}

#[test]
fn other_signature() {
    let mut proto = blazepose_like();
    proto.meta_graphs[0] = proto.meta_graphs[0].clone().signature(
        "encode",
        tfpb::signature().input("tokens", tfpb::tensor_info("t:0", DataType::DtInt64, tfpb::shape(&[-1, 128]))),
    );
    let bytes = proto.write_to_bytes().unwrap();
    let graph = saved_model().with_signature("encode").graph_for_read(&mut &*bytes).unwrap();
    let inputs = list_inputs(&graph).unwrap();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].datum_type, Some(DatumType::I64));
}

#[test]
fn directory_without_saved_model() {
    let dir = tempfile::tempdir().unwrap();
    let e = saved_model().graph_for_path(dir.path()).unwrap_err();
    assert_eq!(
        IntrospectError::kind_of(&e),
        Some(&IntrospectError::ArtifactNotFound(dir.path().join("saved_model.pb")))
    );
}

#[test]
fn malformed_saved_model() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("saved_model.pb"), [0xffu8; 16]).unwrap();
    let e = saved_model().graph_for_path(dir.path()).unwrap_err();
    assert!(matches!(
        IntrospectError::kind_of(&e),
        Some(IntrospectError::DeserializationError { format: ModelFormat::SavedModel, .. })
    ));
}
