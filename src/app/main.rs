use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::error::ClassifierError;
use crate::feature::{Feature, ImageFeature};
use crate::image_classifier::impl_mobilenet_v2::ImageClassifierMobileNetV2;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::model_provider::interface::{
    load_in_background, Model, ModelMetadata, ModelProvider, ModelResult,
};
use image::DynamicImage;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

struct Predictor {
    classifier: Arc<dyn ImageClassifier + Send + Sync>,
    metadata: ModelMetadata,
}

/// Classifies one camera frame per tick once the model has loaded.
pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    model_provider: Arc<dyn ModelProvider + Send + Sync>,
    loading: Option<Receiver<ModelResult>>,
    predictor: Option<Predictor>,
    last_classification: Option<Classification>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        model_provider: Arc<dyn ModelProvider + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("app"),
            camera,
            model_provider,
            loading: None,
            predictor: None,
            last_classification: None,
        }
    }

    pub fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.begin()?;

        let mut frames = 0;
        while self.config.max_frames.map_or(true, |max| frames < max) {
            self.step()?;
            frames += 1;
            std::thread::sleep(self.config.tick_rate);
        }

        self.stop()
    }

    /// Starts the camera and kicks off the model load. Does nothing while a
    /// load is pending or a model is already loaded.
    pub fn begin(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.is_loading() || self.is_ready() {
            return Ok(());
        }

        self.camera.start()?;
        self.loading = Some(load_in_background(
            self.model_provider.clone(),
            self.logger.clone(),
        ));
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.loading = None;
        self.predictor = None;
        self.camera.stop()?;
        self.logger.info("Stopped")?;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Result currently on display. Failed frames leave it untouched.
    pub fn last_classification(&self) -> Option<&Classification> {
        self.last_classification.as_ref()
    }

    /// One tick of the frame loop. `Ok(None)` while the model is loading or
    /// when the frame could not be classified.
    pub fn step(
        &mut self,
    ) -> Result<Option<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.poll_model();

        if !self.is_ready() {
            return Ok(None);
        }

        let result = self
            .camera
            .capture_frame()
            .and_then(|frame| self.classify_frame(frame));

        match result {
            Ok(classification) => {
                self.last_classification = Some(classification.clone());
                Ok(Some(classification))
            }
            Err(e) => {
                self.logger.error(&format!("Skipping frame: {}", e))?;
                Ok(None)
            }
        }
    }

    pub fn classify_frame(
        &self,
        frame: DynamicImage,
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>> {
        let predictor = self.predictor.as_ref().ok_or_else(|| {
            ClassifierError::ResourceUnavailable("model is still loading".to_string())
        })?;

        let feature = Feature::Image(ImageFeature {
            image: frame,
            normalization: predictor.metadata.normalization,
            aspect_mode: predictor.metadata.aspect_mode,
        });

        predictor.classifier.classify(&[feature])
    }

    fn poll_model(&mut self) {
        let Some(receiver) = &self.loading else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(model)) => {
                self.predictor = Some(self.predictor_for(model));
                self.loading = None;
            }
            // The loader already logged the failure; stay unready.
            Ok(Err(_)) | Err(TryRecvError::Disconnected) => {
                self.loading = None;
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    fn predictor_for(&self, model: Model) -> Predictor {
        Predictor {
            classifier: Arc::new(ImageClassifierMobileNetV2::new(
                model.engine,
                model.labels,
                self.logger.clone(),
            )),
            metadata: model.metadata,
        }
    }
}
