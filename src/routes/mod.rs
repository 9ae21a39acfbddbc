//! # 라우트 핸들러 모듈
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `plans`: 주간 학습 계획 생성

pub mod health;
pub mod plans;

pub use health::*;
pub use plans::*;

use axum::{
    routing::{get, post},
    Router,
};

/// `/api/v1` 아래에 붙일 API 라우터를 만듭니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/plans", post(generate_plan))
        .route("/health", get(health_check))
        // .with_state(): 이 라우터의 모든 핸들러에서 AppState를 사용할 수 있게 합니다.
        .with_state(state)
}
