use crate::tensor::Tensor;
use image::{imageops, DynamicImage};

/// Per-channel mean/std applied to pixels scaled into [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    pub fn imagenet() -> Self {
        Self {
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
        }
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            mean: [0.0; 3],
            std: [1.0; 3],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AspectMode {
    /// Letterbox: keep the whole image, pad the rest with black.
    #[default]
    ScaleToFit,
    /// Cover the target and crop the overflow from the centre.
    AspectFill,
    /// Ignore aspect ratio.
    Stretch,
}

fn same_aspect(source: (u32, u32), target: (u32, u32)) -> bool {
    source.0 as u64 * target.1 as u64 == source.1 as u64 * target.0 as u64
}

pub fn resize_image(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mode: AspectMode,
) -> DynamicImage {
    if same_aspect((image.width(), image.height()), (width, height)) {
        return image.resize_exact(width, height, imageops::FilterType::Triangle);
    }

    match mode {
        AspectMode::Stretch => image.resize_exact(width, height, imageops::FilterType::Triangle),
        AspectMode::AspectFill => {
            image.resize_to_fill(width, height, imageops::FilterType::Triangle)
        }
        AspectMode::ScaleToFit => {
            let (w, h) = (image.width() as f32, image.height() as f32);
            let scale = (width as f32 / w).min(height as f32 / h);
            let new_w = ((w * scale) as u32).clamp(1, width);
            let new_h = ((h * scale) as u32).clamp(1, height);

            let scaled = image
                .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
                .to_rgb8();

            let mut padded = DynamicImage::new_rgb8(width, height).to_rgb8();
            let x_offset = (width - new_w) / 2;
            let y_offset = (height - new_h) / 2;
            imageops::replace(&mut padded, &scaled, x_offset as i64, y_offset as i64);

            DynamicImage::from(padded)
        }
    }
}

fn image_to_nchw(image: &DynamicImage, normalization: &Normalization) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let plane = width * height;
    let mut tensor = Tensor::zeros(vec![1, 3, height, width]);
    let data = tensor.data_mut();

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let offset = y as usize * width + x as usize;
        for c in 0..3 {
            let value = pixel[c] as f32 / 255.0;
            data[c * plane + offset] = (value - normalization.mean[c]) / normalization.std[c];
        }
    }

    tensor
}

/// Resizes per `mode` and lays the image out as a `[1, 3, height, width]`
/// normalized tensor.
pub fn image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
    mode: AspectMode,
    normalization: &Normalization,
) -> Tensor {
    let resized = resize_image(image, width, height, mode);
    image_to_nchw(&resized, normalization)
}
