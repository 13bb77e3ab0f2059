use std::io::Read;
use std::path::Path;

use crate::errors::{PeekResult, ensure_exists};
use crate::model::{Graph, ModelFormat};

/// A model format loader.
///
/// `ProtoModel` is the raw deserialized artifact (protobuf message, flatbuffer...),
/// `Graph` the format independent view the introspection operations work on.
pub trait Framework<ProtoModel> {
    fn format(&self) -> ModelFormat;

    /// Deserialize a raw model from a reader.
    fn proto_model_for_read(&self, reader: &mut dyn Read) -> PeekResult<ProtoModel>;

    /// Translate a raw model into a graph.
    fn graph_for_proto_model(&self, proto: &ProtoModel) -> PeekResult<Graph>;

    /// Deserialize a raw model from a path.
    fn proto_model_for_path(&self, p: &Path) -> PeekResult<ProtoModel> {
        ensure_exists(p)?;
        let mut file = fs_err::File::open(p)?;
        self.proto_model_for_read(&mut file)
    }

    fn graph_for_read(&self, reader: &mut dyn Read) -> PeekResult<Graph> {
        let proto = self.proto_model_for_read(reader)?;
        self.graph_for_proto_model(&proto)
    }

    fn graph_for_path(&self, p: &Path) -> PeekResult<Graph> {
        let proto = self.proto_model_for_path(p)?;
        debug!("Loaded {} artifact from {:?}", self.format(), p);
        self.graph_for_proto_model(&proto)
    }
}
