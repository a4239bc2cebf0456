use crate::classification_head;
use crate::error::ClassifierError;
use crate::feature::Feature;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::inference_engine::interface::InferenceEngine;
use crate::label_table::LabelTable;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// MobileNet v2 predictor: one image in, top-1 ImageNet label out with its
/// unnormalized score.
pub struct ImageClassifierMobileNetV2 {
    engine: Arc<dyn InferenceEngine + Send + Sync>,
    labels: Arc<LabelTable>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierMobileNetV2 {
    pub fn new(
        engine: Arc<dyn InferenceEngine + Send + Sync>,
        labels: Arc<LabelTable>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            engine,
            labels,
            logger: logger
                .with_namespace("image_classifier")
                .with_namespace("mobilenet_v2"),
        }
    }
}

impl ImageClassifier for ImageClassifierMobileNetV2 {
    fn classify(
        &self,
        features: &[Feature],
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        let [feature] = features else {
            return Err(ClassifierError::invalid_argument(format!(
                "MobileNet v2 predictor expects a single feature, got {}",
                features.len()
            ))
            .into());
        };

        let input = feature.to_input(&self.engine.input_type())?;

        // Outputs are released when this scope ends.
        let outputs = self.engine.predict(&input)?;

        let logits = outputs
            .get(0)
            .ok_or_else(|| ClassifierError::invalid_argument("model produced no outputs"))?;

        let row = match logits.shape() {
            &[1, _] => logits.row(0),
            _ => None,
        }
        .ok_or_else(|| {
            ClassifierError::invalid_argument(format!(
                "expected logits of shape [1, N], got {:?}",
                logits.shape()
            ))
        })?;

        let classification = classification_head::classify(row, &self.labels)?;

        self.logger.info(&format!(
            "Classified {} ({:.2})",
            classification.label, classification.confidence
        ))?;

        Ok(classification)
    }
}
