/// Text served at `/`, doubling as a liveness check
pub const WELCOME_MESSAGE: &str = "WELCOME CLASSBOOK";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Welcome message",
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    )
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
