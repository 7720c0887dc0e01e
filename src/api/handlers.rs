//! API request handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::features::FeatureExtractor;
use crate::model::Classifier;

/// Shared application state: the artifact pair loaded once at startup.
///
/// Both objects are read-only for the life of the process, so concurrent
/// requests need no locking. Trait objects let tests substitute stubs.
pub struct AppState {
    pub classifier: Box<dyn Classifier + Send + Sync>,
    pub extractor: Box<dyn FeatureExtractor + Send + Sync>,
}

/// Predict request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub message: String,
}

/// Predict response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub message: String,
    pub prediction: String,
    pub probability: f64,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// POST /predict - classify one message
///
/// Stateless: transforms the message through the frozen vectorizer and
/// scores it. An empty message vectorizes to the zero row and is answered
/// from the classifier's prior, never rejected. A body without a `message`
/// field never reaches this handler; the `Json` extractor rejects it with
/// 422.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let row = state.extractor.transform_one(&request.message);
    let (p_ham, p_spam) = state.classifier.predict_proba(&row);

    let prediction = state.classifier.predict(&row);

    Json(PredictResponse {
        message: request.message,
        prediction: prediction.as_str().to_string(),
        probability: p_ham.max(p_spam),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Label;
    use crate::features::CountVectorizer;
    use crate::model::{LogisticRegression, TrainParams};

    fn toy_state() -> Arc<AppState> {
        let texts = ["free prize free", "free cash", "hello friend", "hello there"];
        let labels = [Label::Spam, Label::Spam, Label::Ham, Label::Ham];

        let mut vectorizer = CountVectorizer::new();
        let matrix = vectorizer.fit_transform(&texts);
        let model = LogisticRegression::fit(&matrix, &labels, TrainParams::default()).unwrap();

        Arc::new(AppState {
            classifier: Box::new(model),
            extractor: Box::new(vectorizer),
        })
    }

    #[tokio::test]
    async fn predicts_spam_for_spammy_message() {
        let response = predict(
            State(toy_state()),
            Json(PredictRequest {
                message: "free free free".to_string(),
            }),
        )
        .await;

        assert_eq!(response.0.prediction, "spam");
        assert_eq!(response.0.message, "free free free");
        assert!(response.0.probability >= 0.5);
    }

    #[tokio::test]
    async fn empty_message_is_answered_not_rejected() {
        let response = predict(
            State(toy_state()),
            Json(PredictRequest {
                message: String::new(),
            }),
        )
        .await;

        assert!(response.0.prediction == "spam" || response.0.prediction == "ham");
        assert!(response.0.probability >= 0.5 && response.0.probability <= 1.0);
    }

    #[tokio::test]
    async fn out_of_vocabulary_message_gets_the_prior_label() {
        let response = predict(
            State(toy_state()),
            Json(PredictRequest {
                message: "zzz qqq xxx".to_string(),
            }),
        )
        .await;

        // Zero vector: the decision comes from the bias alone, strict `>`
        // means a dead tie goes to ham.
        assert!(response.0.prediction == "spam" || response.0.prediction == "ham");
    }
}
