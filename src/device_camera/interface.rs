use image::DynamicImage;

pub trait DeviceCamera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn capture_frame(&self) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>>;
}
