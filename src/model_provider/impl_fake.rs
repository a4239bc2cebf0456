use crate::error::ClassifierError;
use crate::inference_engine::impl_fake::InferenceEngineFake;
use crate::label_table::LabelTable;
use crate::model_provider::interface::{Model, ModelMetadata, ModelProvider, ModelResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct ModelProviderFake {
    engine: Arc<InferenceEngineFake>,
    labels: Arc<LabelTable>,
    metadata: ModelMetadata,
    load_delay: Duration,
    load_error: Option<String>,
    loads: AtomicUsize,
}

impl ModelProviderFake {
    /// Random logits over `class_count` generated labels.
    pub fn new(input_shape: (u32, u32), class_count: usize) -> Self {
        let labels = (0..class_count).map(|i| format!("class_{}", i)).collect();
        Self::with_engine(InferenceEngineFake::new(input_shape, class_count), labels)
    }

    pub fn with_engine(engine: InferenceEngineFake, labels: LabelTable) -> Self {
        Self {
            engine: Arc::new(engine),
            labels: Arc::new(labels),
            metadata: ModelMetadata::default(),
            load_delay: Duration::ZERO,
            load_error: None,
            loads: AtomicUsize::new(0),
        }
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_load_delay(mut self, load_delay: Duration) -> Self {
        self.load_delay = load_delay;
        self
    }

    /// Every `load` fails with `ResourceUnavailable(message)`.
    pub fn with_load_error(mut self, message: &str) -> Self {
        self.load_error = Some(message.to_string());
        self
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn engine(&self) -> Arc<InferenceEngineFake> {
        self.engine.clone()
    }
}

impl ModelProvider for ModelProviderFake {
    fn load(&self) -> ModelResult {
        self.loads.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.load_delay);

        if let Some(message) = &self.load_error {
            return Err(ClassifierError::ResourceUnavailable(message.clone()).into());
        }

        Ok(Model {
            engine: self.engine.clone(),
            labels: self.labels.clone(),
            metadata: self.metadata,
        })
    }
}
