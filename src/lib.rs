pub mod app;
pub mod classification_head;
pub mod config;
pub mod device_camera;
pub mod error;
pub mod feature;
pub mod image_classifier;
pub mod image_preprocessor;
pub mod inference_engine;
pub mod label_table;
pub mod library;
pub mod model_provider;
pub mod tensor;
