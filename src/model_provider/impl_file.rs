use crate::config::ModelConfig;
use crate::error::ClassifierError;
use crate::inference_engine::impl_tract_onnx::InferenceEngineTractOnnx;
use crate::label_table::LabelTable;
use crate::model_provider::interface::{Model, ModelMetadata, ModelProvider, ModelResult};
use std::path::Path;
use std::sync::Arc;

/// Loads an ONNX model and its label file from disk.
pub struct ModelProviderFile {
    config: ModelConfig,
}

impl ModelProviderFile {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }
}

impl ModelProvider for ModelProviderFile {
    fn load(&self) -> ModelResult {
        for path in [&self.config.onnx_model_path, &self.config.labels_path] {
            if !Path::new(path).exists() {
                let message = format!("{} not found", path);
                return Err(ClassifierError::ResourceUnavailable(message).into());
            }
        }

        let labels = LabelTable::from_path(&self.config.labels_path)?;
        let engine =
            InferenceEngineTractOnnx::new(&self.config.onnx_model_path, self.config.input_shape)?;

        Ok(Model {
            engine: Arc::new(engine),
            labels: Arc::new(labels),
            metadata: ModelMetadata {
                normalization: self.config.normalization,
                aspect_mode: self.config.aspect_mode,
            },
        })
    }
}
