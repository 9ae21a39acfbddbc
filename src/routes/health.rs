//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /api/v1/health` → `{ "status": "ok", "service": "studyplan", "version": "..." }`
//!
//! 로드밸런서나 컨테이너 오케스트레이터가 서버 상태를 확인할 때 사용합니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /health` — 서버 상태와 버전을 돌려줍니다. 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        // env!: 컴파일 시점에 Cargo.toml의 버전 문자열을 박아 넣습니다.
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "studyplan");
    }
}
