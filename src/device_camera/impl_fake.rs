use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Solid random-colour frames at the preview resolution.
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    resolution: (u32, u32),
    running: AtomicBool,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, resolution: (u32, u32)) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            resolution,
            running: AtomicBool::new(false),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Starting camera at {}x{}",
            self.resolution.0, self.resolution.1
        ))?;
        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera")?;
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
        if !self.running.load(Ordering::SeqCst) {
            return Err("camera is not running".into());
        }

        let mut rng = rand::rng();
        let color: Rgb<u8> = Rgb(rng.random());
        let (width, height) = self.resolution;

        Ok(DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use chrono::{Offset, Utc};

    #[test]
    fn test_capture_requires_start() {
        let camera = DeviceCameraFake::new(Arc::new(LoggerConsole::new(Utc.fix())), (32, 24));

        assert!(camera.capture_frame().is_err());

        camera.start().unwrap();
        let frame = camera.capture_frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (32, 24));

        camera.stop().unwrap();
        assert!(camera.capture_frame().is_err());
    }
}
