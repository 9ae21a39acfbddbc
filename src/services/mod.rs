//! # 주간 학습 세션 스케줄러
//!
//! 약점 주제와 학습 선호도를 받아 한 주의 학습/복습/버퍼 세션을 배치합니다.
//! 순수한 동기 계산이며 저장소나 외부 상태에 의존하지 않습니다.
//!
//! 하위 모듈 (호출 순서):
//! - `planner`: 주간 계획 조립 + 입력 검증
//! - `ranking`: 주제 우선순위 정렬 (한 번, 맨 처음)
//! - `day`: 하루 배치와 주 단위 회전 상태
//! - `sizing`: 세션 길이 계산 (세션마다)
//! - `revision`: 주기적 복습 주입
//! - `buffer`: 하루 끝의 보충 세션
//! - `slots`: 시간 슬롯 목록
//! - `summary`: 생성된 계획의 통계 요약

pub mod buffer;
pub mod day;
pub mod planner;
pub mod ranking;
pub mod revision;
pub mod sizing;
pub mod slots;
pub mod summary;

pub use planner::{build_weekly_plan, plan_from_request, week_start_monday, PlanError};
pub use slots::SlotPolicy;
pub use summary::{summarize, PlanSummary};
