//! # studyplan
//!
//! 학생용 주간 학습 세션 스케줄러.
//!
//! 약점 주제와 학습 선호도로부터 하루 시간 한도, 우선순위, 학습 속도,
//! 주기적 복습, 과목 회전 규칙을 지키는 일주일치 세션 목록을 만듭니다.
//!
//! - `models`: 입력/출력 데이터 구조체
//! - `services`: 스케줄러 본체 (순수 동기 계산)
//! - `routes`, `config`, `error`: HTTP 서비스 계층

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
