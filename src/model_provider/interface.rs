use crate::image_preprocessor::{AspectMode, Normalization};
use crate::inference_engine::interface::InferenceEngine;
use crate::label_table::LabelTable;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Preprocessing parameters that ship with the model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelMetadata {
    pub normalization: Normalization,
    pub aspect_mode: AspectMode,
}

/// A loaded model, ready for classification.
#[derive(Clone)]
pub struct Model {
    pub engine: Arc<dyn InferenceEngine + Send + Sync>,
    pub labels: Arc<LabelTable>,
    pub metadata: ModelMetadata,
}

pub type ModelResult = Result<Model, Box<dyn std::error::Error + Send + Sync>>;

pub trait ModelProvider: Send + Sync {
    fn load(&self) -> ModelResult;
}

/// Runs `provider.load()` once on a worker thread.
pub fn load_in_background(
    provider: Arc<dyn ModelProvider + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Receiver<ModelResult> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let _ = logger.info("Loading model...");
        let loaded = provider.load();
        match &loaded {
            Ok(model) => {
                let _ = logger.info(&format!("Model loaded with {} labels", model.labels.len()));
            }
            Err(e) => {
                let _ = logger.error(&format!("Model failed to load: {}", e));
            }
        }
        let _ = sender.send(loaded);
    });

    receiver
}
