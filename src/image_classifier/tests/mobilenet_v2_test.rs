use crate::error::ClassifierError;
use crate::feature::{Feature, ImageFeature};
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::tests::fixture::{Fixture, INPUT_SHAPE};
use crate::image_preprocessor::{AspectMode, Normalization};
use crate::tensor::Tensor;
use image::DynamicImage;

fn image_feature() -> Feature {
    Feature::Image(ImageFeature {
        image: DynamicImage::new_rgb8(64, 48),
        normalization: Normalization::imagenet(),
        aspect_mode: AspectMode::AspectFill,
    })
}

fn invalid_argument(error: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    matches!(
        error.downcast_ref::<ClassifierError>(),
        Some(ClassifierError::InvalidArgument(_))
    )
}

#[test]
fn test_classifies_image() {
    let f = Fixture::new(vec![0.1, 0.9, 0.2], &["cat", "dog", "fox"]);

    let result = f.image_classifier.classify(&[image_feature()]).unwrap();

    assert_eq!(
        result,
        Classification {
            label: "dog".to_string(),
            confidence: 0.9,
        }
    );
    assert_eq!(f.engine.calls(), 1);
}

#[test]
fn test_classifies_raw_tensor() {
    let f = Fixture::new(vec![-1.0, -0.2, -3.0], &["x", "y", "z"]);
    let tensor = Tensor::zeros(vec![1, 3, INPUT_SHAPE.0 as usize, INPUT_SHAPE.1 as usize]);

    let result = f.image_classifier.classify(&[Feature::Tensor(tensor)]).unwrap();

    assert_eq!(result.label, "y");
    assert_eq!(result.confidence, -0.2);
}

#[test]
fn test_rejects_no_features() {
    let f = Fixture::new(vec![1.0], &["only"]);

    let error = f.image_classifier.classify(&[]).unwrap_err();

    assert!(invalid_argument(error.as_ref()));
    assert_eq!(f.engine.calls(), 0);
}

#[test]
fn test_rejects_multiple_features() {
    let f = Fixture::new(vec![1.0], &["only"]);

    let error = f
        .image_classifier
        .classify(&[image_feature(), image_feature()])
        .unwrap_err();

    assert!(invalid_argument(error.as_ref()));
    assert_eq!(f.engine.calls(), 0);
}

#[test]
fn test_rejects_unsupported_tensor() {
    let f = Fixture::new(vec![1.0], &["only"]);

    let error = f
        .image_classifier
        .classify(&[Feature::Tensor(Tensor::zeros(vec![1, 1000]))])
        .unwrap_err();

    assert!(invalid_argument(error.as_ref()));
    assert_eq!(f.engine.calls(), 0);
}

#[test]
fn test_rejects_label_mismatch() {
    let f = Fixture::new(vec![0.3, 0.7], &["a", "b", "c"]);

    let error = f.image_classifier.classify(&[image_feature()]).unwrap_err();

    assert!(invalid_argument(error.as_ref()));
}

#[test]
fn test_rejects_empty_logits() {
    let f = Fixture::new(vec![], &[]);

    let error = f.image_classifier.classify(&[image_feature()]).unwrap_err();

    assert!(invalid_argument(error.as_ref()));
}

#[test]
fn test_outputs_are_released() {
    let f = Fixture::new(vec![0.1, 0.9], &["a", "b"]);

    f.image_classifier.classify(&[image_feature()]).unwrap();
    f.image_classifier.classify(&[image_feature()]).unwrap();

    assert_eq!(f.engine.calls(), 2);
    assert_eq!(f.engine.outstanding_outputs(), 0);
}

#[test]
fn test_outputs_are_released_on_error() {
    let f = Fixture::new(vec![0.1, 0.9], &["a"]);

    assert!(f.image_classifier.classify(&[image_feature()]).is_err());

    assert_eq!(f.engine.calls(), 1);
    assert_eq!(f.engine.outstanding_outputs(), 0);
}

#[test]
fn test_repeated_calls_agree() {
    let f = Fixture::new(vec![2.0, 5.0, 5.0, 1.0], &["a", "b", "c", "d"]);

    let first = f.image_classifier.classify(&[image_feature()]).unwrap();
    let second = f.image_classifier.classify(&[image_feature()]).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.label, "b");
}
