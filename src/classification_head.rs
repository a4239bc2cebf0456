use crate::error::ClassifierError;
use crate::image_classifier::interface::Classification;
use crate::label_table::LabelTable;

/// Index of the first maximum. Only a strictly greater score replaces the
/// current best, so ties resolve to the lowest index.
pub fn arg_max(logits: &[f32]) -> Option<usize> {
    if logits.is_empty() {
        return None;
    }

    let mut best = 0;
    for (index, &score) in logits.iter().enumerate().skip(1) {
        if score > logits[best] {
            best = index;
        }
    }

    Some(best)
}

/// Picks the top-1 label for a row of raw logits. The confidence is the raw
/// score, without softmax.
pub fn classify(logits: &[f32], labels: &LabelTable) -> Result<Classification, ClassifierError> {
    if logits.len() != labels.len() {
        return Err(ClassifierError::invalid_argument(format!(
            "logits has {} classes but label table has {}",
            logits.len(),
            labels.len()
        )));
    }

    let index = arg_max(logits)
        .ok_or_else(|| ClassifierError::invalid_argument("logits must not be empty"))?;

    let label = labels
        .get(index)
        .ok_or_else(|| ClassifierError::invalid_argument(format!("no label for class {}", index)))?;

    Ok(Classification {
        label: label.to_string(),
        confidence: logits[index],
    })
}
