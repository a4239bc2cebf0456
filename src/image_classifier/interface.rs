use crate::feature::Feature;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        features: &[Feature],
    ) -> Result<Classification, Box<dyn std::error::Error + Send + Sync>>;
}
