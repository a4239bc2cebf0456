use crate::error::ClassifierError;
use crate::image_preprocessor::{image_to_tensor, AspectMode, Normalization};
use crate::tensor::{Tensor, TensorType};
use image::DynamicImage;

#[derive(Debug, Clone)]
pub struct ImageFeature {
    pub image: DynamicImage,
    pub normalization: Normalization,
    pub aspect_mode: AspectMode,
}

impl ImageFeature {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            normalization: Normalization::default(),
            aspect_mode: AspectMode::default(),
        }
    }
}

/// A model input. Only image features are preprocessed; raw tensors are
/// passed to the engine as they are.
#[derive(Debug, Clone)]
pub enum Feature {
    Tensor(Tensor),
    Image(ImageFeature),
}

impl Feature {
    /// Builds the engine input for `input_type`.
    pub fn to_input(&self, input_type: &TensorType) -> Result<Tensor, ClassifierError> {
        match self {
            Feature::Tensor(tensor) => {
                if tensor.shape() != input_type.shape.as_slice() {
                    return Err(ClassifierError::invalid_argument(format!(
                        "unsupported tensor feature of shape {:?}, model expects {:?}",
                        tensor.shape(),
                        input_type.shape
                    )));
                }
                Ok(tensor.clone())
            }
            Feature::Image(feature) => {
                let (height, width) = input_type.image_size().ok_or_else(|| {
                    ClassifierError::invalid_argument(format!(
                        "model input {:?} is not an image",
                        input_type.shape
                    ))
                })?;

                if feature.image.width() == 0 || feature.image.height() == 0 {
                    return Err(ClassifierError::invalid_argument("image feature is empty"));
                }

                Ok(image_to_tensor(
                    &feature.image,
                    width,
                    height,
                    feature.aspect_mode,
                    &feature.normalization,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_type() -> TensorType {
        TensorType {
            shape: vec![1, 3, 8, 8],
        }
    }

    #[test]
    fn test_tensor_passes_through_unchanged() {
        let tensor = Tensor::new(vec![1, 3, 8, 8], (0..192).map(|v| v as f32).collect()).unwrap();

        let input = Feature::Tensor(tensor.clone()).to_input(&image_type()).unwrap();

        assert_eq!(input, tensor);
    }

    #[test]
    fn test_tensor_with_wrong_shape_is_unsupported() {
        let feature = Feature::Tensor(Tensor::zeros(vec![1, 10]));

        let result = feature.to_input(&image_type());

        assert!(matches!(result, Err(ClassifierError::InvalidArgument(_))));
    }

    #[test]
    fn test_image_is_resized_to_input_shape() {
        let feature = Feature::Image(ImageFeature::new(DynamicImage::new_rgb8(32, 16)));

        let input = feature.to_input(&image_type()).unwrap();

        assert_eq!(input.shape(), &[1, 3, 8, 8]);
    }

    #[test]
    fn test_empty_image_is_invalid() {
        let feature = Feature::Image(ImageFeature::new(DynamicImage::new_rgb8(0, 0)));

        let result = feature.to_input(&image_type());

        assert!(matches!(result, Err(ClassifierError::InvalidArgument(_))));
    }

    #[test]
    fn test_image_into_non_image_model_is_invalid() {
        let feature = Feature::Image(ImageFeature::new(DynamicImage::new_rgb8(4, 4)));

        let result = feature.to_input(&TensorType { shape: vec![1, 10] });

        assert!(matches!(result, Err(ClassifierError::InvalidArgument(_))));
    }
}
