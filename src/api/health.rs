use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

/// Liveness plus what the current session was granted.
pub async fn health(Extension(app): Extension<AppState>) -> Json<Value> {
    let session = app.session.lock().await;
    let token = session.token();

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "authenticated": token.is_some(),
        "scope": token.map(|t| t.scope.as_str()),
        "expires_at": token.map(|t| t.expires_at().to_rfc3339()),
    }))
}
