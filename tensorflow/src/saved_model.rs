use std::io::Read;
use std::path::{Path, PathBuf};

use graphpeek_core::internal::*;
use prost::Message;

use crate::tfpb::tensorflow::{MetaGraphDef, SavedModel as SavedModelProto, SignatureDef};

pub const SAVED_MODEL_FILENAME: &str = "saved_model.pb";
pub const DEFAULT_SIGNATURE: &str = "serving_default";
pub const DEFAULT_TAG: &str = "serve";

/// Saved model loader, resolving one signature of one tagged meta graph.
#[derive(Clone, Debug)]
pub struct SavedModel {
    pub signature: String,
    pub tags: Vec<String>,
}

impl Default for SavedModel {
    fn default() -> SavedModel {
        SavedModel { signature: DEFAULT_SIGNATURE.to_string(), tags: vec![DEFAULT_TAG.to_string()] }
    }
}

impl SavedModel {
    pub fn with_signature(self, signature: impl Into<String>) -> SavedModel {
        SavedModel { signature: signature.into(), ..self }
    }

    pub fn with_tags(self, tags: Vec<String>) -> SavedModel {
        SavedModel { tags, ..self }
    }

    /// The protobuf file of a saved model, given its directory or the file itself.
    pub fn proto_path(p: &Path) -> PathBuf {
        if p.is_dir() { p.join(SAVED_MODEL_FILENAME) } else { p.to_path_buf() }
    }

    /// Pick the meta graph carrying all requested tags, or the only one there is.
    pub fn meta_graph<'p>(&self, proto: &'p SavedModelProto) -> PeekResult<&'p MetaGraphDef> {
        if let Some(found) = proto
            .meta_graphs
            .iter()
            .find(|mg| self.tags.iter().all(|t| mg.tags().contains(t)))
        {
            return Ok(found);
        }
        match &*proto.meta_graphs {
            [only] => {
                warn!(
                    "No meta graph tagged {:?}, using the only one ({:?})",
                    self.tags,
                    only.tags()
                );
                Ok(only)
            }
            _ => Err(IntrospectError::deserialization(
                ModelFormat::SavedModel,
                format!(
                    "no meta graph tagged {:?} among {:?}",
                    self.tags,
                    proto.meta_graphs.iter().map(|mg| mg.tags()).collect::<Vec<_>>()
                ),
            ))?,
        }
    }

    pub fn signature_def<'p>(&self, meta_graph: &'p MetaGraphDef) -> PeekResult<&'p SignatureDef> {
        meta_graph
            .signature_def
            .iter()
            .find(|entry| entry.key == self.signature)
            .and_then(|entry| entry.value.as_ref())
            .ok_or_else(|| {
                IntrospectError::SignatureNotFound {
                    key: self.signature.clone(),
                    available: meta_graph.signature_def.iter().map(|e| e.key.clone()).collect(),
                }
                .into()
            })
    }
}

impl Framework<SavedModelProto> for SavedModel {
    fn format(&self) -> ModelFormat {
        ModelFormat::SavedModel
    }

    fn proto_model_for_path(&self, p: &Path) -> PeekResult<SavedModelProto> {
        ensure_exists(p)?;
        let pb = Self::proto_path(p);
        ensure_exists(&pb)?;
        let mut file = fs_err::File::open(&pb)?;
        self.proto_model_for_read(&mut file)
    }

    fn proto_model_for_read(&self, r: &mut dyn Read) -> PeekResult<SavedModelProto> {
        let mut v = vec![];
        r.read_to_end(&mut v)?;
        SavedModelProto::decode(&*v)
            .map_err(|e| IntrospectError::deserialization(ModelFormat::SavedModel, e))
            .context("Decoding SavedModel")
    }

    fn graph_for_proto_model(&self, proto: &SavedModelProto) -> PeekResult<Graph> {
        let meta_graph = self.meta_graph(proto)?;
        let signature = self.signature_def(meta_graph)?;
        info!("Using signature {:?} ({})", self.signature, signature.method_name);
        let inputs = signature
            .inputs
            .iter()
            .map(|entry| -> PeekResult<TensorInfo> {
                let info = entry.value.as_ref();
                if let Some(crate::tfpb::tensorflow::tensor_info::Encoding::Name(tensor)) =
                    info.and_then(|i| i.encoding.as_ref())
                {
                    debug!("Signature input {} is graph tensor {}", entry.key, tensor);
                }
                let shape = info
                    .and_then(|i| i.tensor_shape.as_ref())
                    .map(Shape::from)
                    .unwrap_or_else(Shape::unknown);
                let datum_type = info
                    .filter(|i| i.dtype != 0)
                    .map(|i| crate::tensor::datum_type(i.dtype))
                    .transpose()
                    .with_context(|| format!("Signature input {}", entry.key))?;
                Ok(TensorInfo::new(entry.key.clone(), shape, datum_type))
            })
            .collect::<PeekResult<Vec<_>>>()?;
        let nodes = match &meta_graph.graph_def {
            Some(graph_def) => crate::model::graph_nodes(graph_def)?,
            None => vec![],
        };
        Ok(Graph::new(
            ModelFormat::SavedModel,
            nodes,
            Interface::Signature { key: self.signature.clone(), inputs },
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tfpb;
    use crate::tfpb::tensorflow::DataType;

    fn two_meta_graphs() -> SavedModelProto {
        tfpb::saved_model(vec![
            tfpb::meta_graph(&["train"], tfpb::graph()),
            tfpb::meta_graph(&["serve", "gpu"], tfpb::graph()).signature(
                DEFAULT_SIGNATURE,
                tfpb::signature().input(
                    "x",
                    tfpb::tensor_info("serving_default_x:0", DataType::DtInt32, tfpb::shape(&[-1])),
                ),
            ),
        ])
    }

    #[test]
    fn picks_tagged_meta_graph() {
        let proto = two_meta_graphs();
        let mg = SavedModel::default().meta_graph(&proto).unwrap();
        assert_eq!(mg.tags(), &["serve".to_string(), "gpu".to_string()]);
    }

    #[test]
    fn no_matching_tags() {
        let proto = two_meta_graphs();
        let e = SavedModel::default().with_tags(vec!["tpu".into()]).meta_graph(&proto).unwrap_err();
        assert!(matches!(
            IntrospectError::kind_of(&e),
            Some(IntrospectError::DeserializationError { .. })
        ));
    }

    #[test]
    fn single_meta_graph_is_used_whatever_its_tags() {
        let proto = tfpb::saved_model(vec![tfpb::meta_graph(&["custom"], tfpb::graph())]);
        assert!(SavedModel::default().meta_graph(&proto).is_ok());
    }

    #[test]
    fn missing_signature() {
        let proto = two_meta_graphs();
        let e = SavedModel::default().with_signature("predict").graph_for_proto_model(&proto).unwrap_err();
        assert_eq!(
            IntrospectError::kind_of(&e),
            Some(&IntrospectError::SignatureNotFound {
                key: "predict".into(),
                available: vec![DEFAULT_SIGNATURE.into()]
            })
        );
    }

    #[test]
    fn signature_inputs() {
        let graph = SavedModel::default().graph_for_proto_model(&two_meta_graphs()).unwrap();
        let inputs = list_inputs(&graph).unwrap();
        assert_eq!(
            inputs,
            vec![&TensorInfo::new("x".into(), Shape::from_signed([-1]), Some(DatumType::I32))]
        );
    }
}
