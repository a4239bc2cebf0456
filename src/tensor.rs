use crate::error::ClassifierError;

#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl Tensor {
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Result<Self, ClassifierError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(ClassifierError::invalid_argument(format!(
                "tensor of shape {:?} needs {} values, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Row `batch` of a `[B, N]` tensor.
    pub fn row(&self, batch: usize) -> Option<&[f32]> {
        match self.shape.as_slice() {
            &[batches, classes] if batch < batches => {
                Some(&self.data[batch * classes..(batch + 1) * classes])
            }
            _ => None,
        }
    }
}

/// Input shape declared by an inference engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorType {
    pub shape: Vec<usize>,
}

impl TensorType {
    /// `(height, width)` of an NCHW image input.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        match self.shape.as_slice() {
            &[1, 3, height, width] => Some((height as u32, width as u32)),
            _ => None,
        }
    }
}

/// Output tensors of one `predict` call. The release hook runs once when
/// the value is dropped; callers only ever borrow from it.
pub struct OutputFeatures {
    tensors: Vec<Tensor>,
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl OutputFeatures {
    pub fn new(tensors: Vec<Tensor>) -> Self {
        Self {
            tensors,
            on_release: None,
        }
    }

    pub fn with_release(mut self, on_release: impl FnOnce() + Send + 'static) -> Self {
        self.on_release = Some(Box::new(on_release));
        self
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tensor> {
        self.tensors.get(index)
    }
}

impl Drop for OutputFeatures {
    fn drop(&mut self) {
        if let Some(on_release) = self.on_release.take() {
            on_release();
        }
    }
}
