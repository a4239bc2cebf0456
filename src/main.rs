use mobilenet_classifier::app::main::App;
use mobilenet_classifier::config::Config;
use mobilenet_classifier::device_camera::impl_fake::DeviceCameraFake;
use mobilenet_classifier::library::logger::impl_console::LoggerConsole;
use mobilenet_classifier::library::logger::interface::Logger;
use mobilenet_classifier::model_provider::impl_fake::ModelProviderFake;
use mobilenet_classifier::model_provider::impl_file::ModelProviderFile;
use mobilenet_classifier::model_provider::interface::{ModelMetadata, ModelProvider};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(
        logger.clone(),
        config.preview_resolution,
    ));

    let model_provider: Arc<dyn ModelProvider + Send + Sync> =
        if Path::new(&config.model.onnx_model_path).exists() {
            Arc::new(ModelProviderFile::new(config.model.clone()))
        } else {
            logger.info(&format!(
                "{} not found, using fake model",
                config.model.onnx_model_path
            ))?;
            Arc::new(
                ModelProviderFake::new(config.model.input_shape, config.fake_class_count)
                    .with_metadata(ModelMetadata {
                        normalization: config.model.normalization,
                        aspect_mode: config.model.aspect_mode,
                    }),
            )
        };

    let mut app = App::new(config, logger, device_camera, model_provider);

    app.start()?;

    Ok(())
}
