//! Request and response schemas for the REST surface.
//!
//! Request bodies are structurally validated by the JSON extractor before any
//! pipeline call; response bodies are built from a single pipeline outcome and
//! discarded once the response is sent. The `retrieved_documents_count` field
//! on every POST response is the length of the document set the pipeline
//! retrieved for that call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Q&A request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QaReq {
    /// Free-text question for the knowledge base.
    pub query: String,
}

/// Doctor-matching request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DoctorMatchingReq {
    /// Free-text symptom description.
    pub symptoms: String,
}

/// Affirmation-recommendation request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AffirmationReq {
    /// Caller-selected category labels, in the caller's order.
    pub categories: Vec<String>,
}

/// Product-recommendation request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductRecommendationReq {
    /// Free-text description of the user's product interests.
    pub user_input: String,
}

/// Q&A response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QaRes {
    /// Answer grounded in the retrieved documents.
    pub response: String,
    /// Number of documents retrieved for this call.
    pub retrieved_documents_count: usize,
}

/// Doctor-matching response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoctorMatchingRes {
    /// Doctor suggestions grounded in the retrieved documents.
    pub response: String,
    /// Number of documents retrieved for this call.
    pub retrieved_documents_count: usize,
}

/// Affirmation-recommendation response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AffirmationRes {
    /// Narrative accompanying the affirmations.
    pub response: String,
    /// Suggested affirmations; empty when the pipeline returned none.
    pub affirmations: Vec<String>,
    /// Number of documents retrieved for this call.
    pub retrieved_documents_count: usize,
}

/// Product-recommendation response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductRecommendationRes {
    /// Narrative accompanying the recommendations.
    pub response: String,
    /// Recommended products; empty when the pipeline returned none.
    pub products: Vec<String>,
    /// Number of documents retrieved for this call.
    pub retrieved_documents_count: usize,
}

/// Health probe response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthRes {
    /// Always `"healthy"` while the process is serving requests.
    pub status: String,
    /// Human-readable liveness message.
    pub message: String,
}

/// Root endpoint response: a static description of the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiInfoRes {
    /// Welcome message.
    pub message: String,
    /// Map of POST endpoint paths to one-line purposes.
    pub endpoints: BTreeMap<String, String>,
}

/// Uniform JSON error body for gateway faults.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable description, prefixed with the failing operation.
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn qa_request_parses_from_wire_json() {
        let req: QaReq = serde_json::from_value(json!({"query": "What is perimenopause?"}))
            .expect("parse request");
        assert_eq!(req.query, "What is perimenopause?");
    }

    #[test]
    fn affirmation_request_keeps_category_order() {
        let req: AffirmationReq =
            serde_json::from_value(json!({"categories": ["confidence", "calm"]}))
                .expect("parse request");
        assert_eq!(req.categories, vec!["confidence", "calm"]);
    }

    #[test]
    fn qa_response_wire_shape() {
        let res = QaRes {
            response: "It is...".into(),
            retrieved_documents_count: 2,
        };
        assert_eq!(
            serde_json::to_value(&res).expect("serialise response"),
            json!({"response": "It is...", "retrieved_documents_count": 2})
        );
    }

    #[test]
    fn affirmation_response_serialises_empty_list() {
        let res = AffirmationRes {
            response: "Here are some affirmations".into(),
            affirmations: Vec::new(),
            retrieved_documents_count: 1,
        };
        let value = serde_json::to_value(&res).expect("serialise response");
        assert_eq!(value["affirmations"], json!([]));
        assert_eq!(value["retrieved_documents_count"], json!(1));
    }
}
