//! # 주간 학습 계획(Weekly Plan) 모델 정의
//!
//! 스케줄러의 입력 요청과 출력(세션 목록, 주간 계획)을 정의합니다.
//!
//! ## 구조체 역할
//! - `GeneratePlanRequest`: `POST /api/v1/plans`의 요청 본문
//! - `StudySession`: 배치된 시간 블록 하나
//! - `WeeklyPlan`: 한 번의 스케줄링 결과 전체

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FocusTopic, StudyPreferences};

/// 세션 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// 새 내용 학습
    Study,
    /// 이번 주에 이미 학습한 주제의 짧은 복습
    Revision,
    /// 남은 시간을 채우는 자유 보충 시간
    Buffer,
}

/// 배치된 학습 세션 하나
///
/// 한 번의 스케줄링 과정에서만 생성되며, 생성된 뒤에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub subject: String,
    pub topic: String,
    pub session_type: SessionType,
    /// 날짜 ("YYYY-MM-DD")
    pub scheduled_date: NaiveDate,
    /// 슬롯 라벨 (예: "18:00")
    pub scheduled_time: String,
    pub duration_minutes: u32,
    pub difficulty: u8,
    /// 이 세션을 만든 FocusTopic의 id. 버퍼 세션에는 없습니다.
    /// skip_serializing_if: None이면 JSON에서 필드 자체를 생략합니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_topic_id: Option<String>,
}

/// 주간 학습 계획 — 스케줄러 한 번 호출의 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_start_date: NaiveDate,
    /// 시작일 + 6일
    pub week_end_date: NaiveDate,
    /// 모든 세션 `duration_minutes`의 합 (쉬는 시간 제외)
    pub total_planned_minutes: u32,
    /// 날짜, 슬롯 순서로 정렬된 세션 목록
    pub sessions: Vec<StudySession>,
}

/// 계획 생성 요청 — `POST /api/v1/plans`의 요청 본문에 해당합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub focus_topics: Vec<FocusTopic>,
    pub preferences: StudyPreferences,
    pub week_start_date: NaiveDate,
}
