//! # 에러 처리 모듈
//!
//! HTTP 계층의 에러 타입 `AppError`와, 에러를 JSON 응답으로 바꾸는
//! `IntoResponse` 구현을 정의합니다.
//!
//! 응답 본문 형태: `{ "error": { "code": "...", "message": "..." } }`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::PlanError;

/// 요청 처리 중 발생할 수 있는 에러
///
/// 빈 계획(주제 없음, 학습 요일 없음)은 에러가 아니므로 여기에 없습니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 스케줄러 검증 실패 (HTTP 422)
    /// #[from]: `?`로 PlanError를 AppError로 자동 변환합니다.
    #[error(transparent)]
    InvalidInput(#[from] PlanError),

    /// JSON 구조는 맞지만 값이 잘못된 경우 (알 수 없는 열거형 값, 음수 등) (HTTP 422)
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// JSON 자체를 읽을 수 없는 경우 (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::InvalidBody(err.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AppError::InvalidInput(_) | AppError::InvalidBody(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_input")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };
        // 입력 에러는 호출자 쪽 버그이므로 warn 수준으로만 남깁니다.
        tracing::warn!(code, "rejected plan request: {}", self);

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));
        (status, body).into_response()
    }
}
