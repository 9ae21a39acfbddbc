//! # 데이터 모델 모듈
//!
//! 스케줄러가 주고받는 데이터 구조체들을 정의합니다:
//! - `topic`: 약점 주제(FocusTopic)와 우선순위
//! - `preferences`: 학습 선호도와 속도/시간대 열거형
//! - `plan`: 학습 세션, 주간 계획, 계획 생성 요청

pub mod plan;
pub mod preferences;
pub mod topic;

pub use plan::*;
pub use preferences::*;
pub use topic::*;
