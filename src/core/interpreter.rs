use crate::domain::model::{Prediction, SentimentResult};
use crate::utils::error::{Result, SentimentError};
use serde_json::Value;

/// Turns a classifier payload into the best-scoring sentiment.
///
/// Accepts the nested-list shape `[[{"label": .., "score": ..}, ...]]`.
/// Error objects (`{"error": ..}`) and every other shape are reported as
/// [`SentimentError::UnexpectedFormat`] carrying the payload.
pub fn interpret(body: &Value) -> Result<SentimentResult> {
    let predictions = match body {
        Value::Array(outer) => match outer.first() {
            Some(Value::Array(inner)) => inner,
            _ => return Err(unexpected(body)),
        },
        _ => return Err(unexpected(body)),
    };

    if predictions.is_empty() {
        return Err(SentimentError::EmptyPredictions);
    }

    let mut best: Option<Prediction> = None;
    for entry in predictions {
        let prediction: Prediction =
            serde_json::from_value(entry.clone()).map_err(|_| unexpected(body))?;
        // strictly greater: the first of equal scores wins
        if best.as_ref().map_or(true, |b| prediction.score > b.score) {
            best = Some(prediction);
        }
    }

    match best {
        Some(Prediction {
            label: Some(label),
            score,
        }) if !label.is_empty() && score != 0.0 => Ok(SentimentResult { label, score }),
        _ => Err(unexpected(body)),
    }
}

fn unexpected(body: &Value) -> SentimentError {
    tracing::debug!("Unexpected classifier payload: {}", body);
    SentimentError::UnexpectedFormat {
        payload: body.clone(),
    }
}
