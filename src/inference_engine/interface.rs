use crate::tensor::{OutputFeatures, Tensor, TensorType};

pub trait InferenceEngine: Send + Sync {
    fn input_type(&self) -> TensorType;
    fn predict(
        &self,
        input: &Tensor,
    ) -> Result<OutputFeatures, Box<dyn std::error::Error + Send + Sync>>;
}
