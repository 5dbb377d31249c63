//! Collaborator seam for the retrieval-augmented-generation backend.
//!
//! The gateway owns no retrieval, embedding, ranking, or LLM orchestration
//! logic. It talks to the backend through [`RagPipeline`], one method per
//! domain operation, and only reads the typed [`PipelineOutcome`] each call
//! hands back. Retrieved documents are opaque JSON values; the gateway counts
//! them and never interprets their content.

/// Errors a pipeline operation can raise.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The retrieval backend failed while serving the operation.
    #[error("{0}")]
    Backend(String),
    /// The backend produced a result without a field the gateway needs.
    #[error("pipeline result missing `{0}`")]
    MissingField(&'static str),
    /// No retrieval backend has been wired in.
    #[error("no retrieval backend configured")]
    Unconfigured,
}

/// Type alias for Results that can fail with a [`PipelineError`].
pub type PipelineResult<T> = Result<T, PipelineError>;

/// What one pipeline operation hands back to the gateway.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutcome {
    /// Natural-language response grounded in the retrieved documents.
    pub response: String,
    /// Context documents the backend retrieved for this call.
    pub retrieved_documents: Vec<serde_json::Value>,
    /// Suggested affirmations, present on affirmation-recommendation calls.
    pub affirmations: Option<Vec<String>>,
    /// Recommended products, present on product-recommendation calls.
    pub products: Option<Vec<String>>,
}

/// The external RAG collaborator, one method per domain operation.
///
/// Implementations may block; each call serves exactly one HTTP request, so a
/// blocking call stalls only that request's handler. The gateway performs no
/// retries and applies no timeouts.
pub trait RagPipeline: Send + Sync {
    /// Answers a free-text question from the knowledge base.
    fn answer_query(&self, query: &str) -> PipelineResult<PipelineOutcome>;

    /// Matches a free-text symptom description to suitable doctors.
    fn match_doctor(&self, symptoms: &str) -> PipelineResult<PipelineOutcome>;

    /// Suggests affirmations drawn from the chosen categories.
    fn recommend_affirmations(&self, categories: &[String]) -> PipelineResult<PipelineOutcome>;

    /// Recommends products relevant to the user's stated interests.
    fn recommend_products(&self, user_input: &str) -> PipelineResult<PipelineOutcome>;
}

/// Placeholder collaborator for deployments without a retrieval backend.
///
/// Every operation fails with [`PipelineError::Unconfigured`]; the gateway
/// surfaces that as a 500 like any other pipeline fault, so the HTTP surface
/// stays up while the backend is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPipeline;

impl RagPipeline for NullPipeline {
    fn answer_query(&self, _query: &str) -> PipelineResult<PipelineOutcome> {
        Err(PipelineError::Unconfigured)
    }

    fn match_doctor(&self, _symptoms: &str) -> PipelineResult<PipelineOutcome> {
        Err(PipelineError::Unconfigured)
    }

    fn recommend_affirmations(&self, _categories: &[String]) -> PipelineResult<PipelineOutcome> {
        Err(PipelineError::Unconfigured)
    }

    fn recommend_products(&self, _user_input: &str) -> PipelineResult<PipelineOutcome> {
        Err(PipelineError::Unconfigured)
    }
}
