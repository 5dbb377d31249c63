use crate::models::HealthRes;

/// Health service backing the gateway's uptime probe.
///
/// The gateway holds no state of its own, so health is purely process
/// liveness; the probe succeeds regardless of whether a retrieval backend is
/// wired in.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Static health check used by the `/health` endpoint.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            message: "Empress RAG gateway is running".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_reports_healthy() {
        let res = HealthService::check_health();
        assert_eq!(res.status, "healthy");
        assert!(!res.message.is_empty());
    }
}
