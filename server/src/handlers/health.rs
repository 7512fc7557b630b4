/// Liveness check.
pub async fn healthcheck() -> &'static str {
    "1"
}
