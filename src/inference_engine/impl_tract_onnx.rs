use crate::inference_engine::interface::InferenceEngine;
use crate::tensor::{OutputFeatures, Tensor as InputTensor, TensorType};
use std::path::Path;
use tract_onnx::prelude::*;

pub struct InferenceEngineTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    input_type: TensorType,
}

impl InferenceEngineTractOnnx {
    /// Loads an NCHW image model with a fixed `(height, width)` input.
    pub fn new(
        onnx_model_path: impl AsRef<Path>,
        input_shape: (u32, u32),
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let shape = [1, 3, input_shape.0 as usize, input_shape.1 as usize];

        let model = tract_onnx::onnx()
            .model_for_path(onnx_model_path)?
            .with_input_fact(0, f32::fact(shape).into())?
            .into_optimized()?;

        Self::from_typed(model, &shape)
    }

    /// Wraps an already typed model whose single input has `input_shape`.
    pub fn from_typed(
        model: TypedModel,
        input_shape: &[usize],
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            model: model.into_runnable()?,
            input_type: TensorType {
                shape: input_shape.to_vec(),
            },
        })
    }
}

impl InferenceEngine for InferenceEngineTractOnnx {
    fn input_type(&self) -> TensorType {
        self.input_type.clone()
    }

    fn predict(
        &self,
        input: &InputTensor,
    ) -> Result<OutputFeatures, Box<dyn std::error::Error + Send + Sync>> {
        if input.shape() != self.input_type.shape.as_slice() {
            return Err(format!(
                "model expects input {:?}, got {:?}",
                self.input_type.shape,
                input.shape()
            )
            .into());
        }

        let tensor = Tensor::from_shape(input.shape(), input.data())?;
        let outputs = self.model.run(tvec!(tensor.into_tvalue()))?;

        let mut tensors = Vec::with_capacity(outputs.len());
        for output in outputs.iter() {
            let view = output.to_array_view::<f32>()?;
            let data = view.iter().copied().collect();
            tensors.push(InputTensor::new(view.shape().to_vec(), data)?);
        }

        Ok(OutputFeatures::new(tensors))
    }
}
