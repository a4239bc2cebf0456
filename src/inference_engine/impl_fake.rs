use crate::inference_engine::interface::InferenceEngine;
use crate::tensor::{OutputFeatures, Tensor, TensorType};
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct InferenceEngineFake {
    input_type: TensorType,
    class_count: usize,
    logits: Option<Vec<f32>>,
    outstanding: Arc<AtomicUsize>,
    calls: AtomicUsize,
}

impl InferenceEngineFake {
    /// Random logits over `class_count` classes.
    pub fn new(input_shape: (u32, u32), class_count: usize) -> Self {
        Self {
            input_type: TensorType {
                shape: vec![1, 3, input_shape.0 as usize, input_shape.1 as usize],
            },
            class_count,
            logits: None,
            outstanding: Arc::new(AtomicUsize::new(0)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always answers with `logits`.
    pub fn with_logits(input_shape: (u32, u32), logits: Vec<f32>) -> Self {
        Self {
            class_count: logits.len(),
            logits: Some(logits),
            ..Self::new(input_shape, 0)
        }
    }

    /// Outputs handed out and not yet dropped.
    pub fn outstanding_outputs(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_logits(&self) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(logits) = &self.logits {
            return Ok(logits.clone());
        }

        let mut rng = rand::rng();
        let score_dist = Uniform::new(-10.0f32, 10.0)?;

        Ok((0..self.class_count).map(|_| score_dist.sample(&mut rng)).collect())
    }
}

impl InferenceEngine for InferenceEngineFake {
    fn input_type(&self) -> TensorType {
        self.input_type.clone()
    }

    fn predict(
        &self,
        input: &Tensor,
    ) -> Result<OutputFeatures, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if input.shape() != self.input_type.shape.as_slice() {
            return Err(format!(
                "fake engine expected input {:?}, got {:?}",
                self.input_type.shape,
                input.shape()
            )
            .into());
        }

        let logits = self.next_logits()?;
        let output = Tensor::new(vec![1, logits.len()], logits)?;

        self.outstanding.fetch_add(1, Ordering::SeqCst);
        let outstanding = self.outstanding.clone();

        Ok(OutputFeatures::new(vec![output]).with_release(move || {
            outstanding.fetch_sub(1, Ordering::SeqCst);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_logits_have_class_count() {
        let engine = InferenceEngineFake::new((4, 4), 5);
        let input = Tensor::zeros(vec![1, 3, 4, 4]);

        let outputs = engine.predict(&input).unwrap();
        let logits = outputs.get(0).unwrap();

        assert_eq!(logits.shape(), &[1, 5]);
        assert!(logits.data().iter().all(|v| (-10.0..10.0).contains(v)));
    }

    #[test]
    fn test_outputs_are_tracked_until_dropped() {
        let engine = InferenceEngineFake::with_logits((4, 4), vec![0.1, 0.2]);
        let input = Tensor::zeros(vec![1, 3, 4, 4]);

        let outputs = engine.predict(&input).unwrap();
        assert_eq!(engine.outstanding_outputs(), 1);

        drop(outputs);
        assert_eq!(engine.outstanding_outputs(), 0);
        assert_eq!(engine.calls(), 1);
    }

    #[test]
    fn test_rejects_wrong_input_shape() {
        let engine = InferenceEngineFake::new((4, 4), 2);

        assert!(engine.predict(&Tensor::zeros(vec![1, 3, 8, 8])).is_err());
        assert_eq!(engine.outstanding_outputs(), 0);
    }
}
