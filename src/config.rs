use crate::image_preprocessor::{AspectMode, Normalization};
use chrono::{Offset, Utc};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    pub labels_path: String,
    /// `(height, width)` of the model input.
    pub input_shape: (u32, u32),
    pub normalization: Normalization,
    pub aspect_mode: AspectMode,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: "./models/mobilenetv2-7.onnx".to_string(),
            labels_path: "./models/imagenet_labels.txt".to_string(),
            input_shape: (224, 224),
            normalization: Normalization::imagenet(),
            aspect_mode: AspectMode::AspectFill,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    /// Stop after this many ticks; run forever when `None`.
    pub max_frames: Option<usize>,
    pub logger_timezone: chrono::FixedOffset,
    pub preview_resolution: (u32, u32),
    pub fake_class_count: usize,
    pub model: ModelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(500),
            max_frames: None,
            logger_timezone: Utc.fix(),
            preview_resolution: (1280, 720),
            fake_class_count: 1000,
            model: ModelConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Self::default();

        if let Some(path) = var("MOBILENET_MODEL_PATH") {
            config.model.onnx_model_path = path;
        }
        if let Some(path) = var("MOBILENET_LABELS_PATH") {
            config.model.labels_path = path;
        }
        if let Some(frames) = var("MOBILENET_MAX_FRAMES") {
            config.max_frames = Some(frames.parse()?);
        }

        Ok(config)
    }
}
