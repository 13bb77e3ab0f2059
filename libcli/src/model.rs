use std::path::Path;

use graphpeek_core::internal::*;
use graphpeek_tensorflow::saved_model::{DEFAULT_SIGNATURE, DEFAULT_TAG, SAVED_MODEL_FILENAME};
use graphpeek_tensorflow::{SavedModel, Tensorflow};
use graphpeek_tflite::Tflite;

/// How to open a model artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelParams {
    /// Forced format. Guessed from the path when absent.
    pub format: Option<ModelFormat>,
    /// Saved-model signature key.
    pub signature: String,
    /// Saved-model meta graph tags.
    pub tags: Vec<String>,
}

impl Default for ModelParams {
    fn default() -> ModelParams {
        ModelParams {
            format: None,
            signature: DEFAULT_SIGNATURE.to_string(),
            tags: vec![DEFAULT_TAG.to_string()],
        }
    }
}

impl ModelParams {
    pub fn with_format(self, format: ModelFormat) -> ModelParams {
        ModelParams { format: Some(format), ..self }
    }
}

/// Format of an artifact, judging by its path only.
pub fn guess_format(path: &Path) -> ModelFormat {
    if path.is_dir() || path.file_name().is_some_and(|n| n == SAVED_MODEL_FILENAME) {
        ModelFormat::SavedModel
    } else if path.extension().is_some_and(|e| e == "tflite") {
        ModelFormat::Tflite
    } else {
        ModelFormat::FrozenGraph
    }
}

/// Open and deserialize the artifact at `path`.
pub fn load(path: &Path, params: &ModelParams) -> PeekResult<Graph> {
    ensure_exists(path)?;
    let format = params.format.unwrap_or_else(|| guess_format(path));
    info!("Loading {path:?} as {format}");
    let graph = match format {
        ModelFormat::FrozenGraph => Tensorflow.graph_for_path(path)?,
        ModelFormat::SavedModel => SavedModel::default()
            .with_signature(params.signature.clone())
            .with_tags(params.tags.clone())
            .graph_for_path(path)?,
        ModelFormat::Tflite => Tflite.graph_for_path(path)?,
    };
    debug!("{} nodes", graph.nodes.len());
    Ok(graph)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guesses() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(guess_format(dir.path()), ModelFormat::SavedModel);
        assert_eq!(guess_format(&dir.path().join("saved_model.pb")), ModelFormat::SavedModel);
        assert_eq!(guess_format(Path::new("mobilenet_quant.tflite")), ModelFormat::Tflite);
        assert_eq!(guess_format(Path::new("model_float32.pb")), ModelFormat::FrozenGraph);
        assert_eq!(guess_format(Path::new("model")), ModelFormat::FrozenGraph);
    }

    #[test]
    fn missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.pb");
        let e = load(&path, &ModelParams::default().with_format(ModelFormat::SavedModel))
            .unwrap_err();
        assert_eq!(IntrospectError::kind_of(&e), Some(&IntrospectError::ArtifactNotFound(path)));
    }
}
