//! # 학습 계획 API 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/v1/plans | `generate_plan` | 주간 학습 계획 생성 |
//!
//! 계획은 저장하지 않고 바로 돌려줍니다. 저장과 완료 추적은 호출하는 쪽의 몫입니다.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::{
    config::Config,
    error::AppError,
    models::{GeneratePlanRequest, WeeklyPlan},
    services::{self, PlanSummary, SlotPolicy},
};

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 요청 사이에 공유하는 가변 상태는 없습니다.
#[derive(Debug, Clone)]
pub struct AppState {
    pub slot_policy: SlotPolicy,
    pub plan_seed: Option<u64>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            slot_policy: config.slot_policy,
            plan_seed: config.plan_seed,
        }
    }

    /// 요청 하나에 쓸 난수 생성기
    ///
    /// 시드가 설정되어 있으면 매번 같은 시드로 시작하므로 같은 입력 → 같은 계획입니다.
    fn rng(&self) -> StdRng {
        match self.plan_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// `POST /plans` 응답 — 주간 계획 필드에 `summary`를 더한 형태
///
/// `#[serde(flatten)]`: WeeklyPlan의 필드를 중첩 없이 같은 JSON 객체에 펼칩니다.
#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    #[serde(flatten)]
    pub plan: WeeklyPlan,
    pub summary: PlanSummary,
}

/// `POST /plans` — 주간 학습 계획을 생성합니다.
///
/// 요청 본문을 `Result<Json<_>, JsonRejection>`으로 받아
/// 파싱 실패도 우리 에러 형식(`{ "error": ... }`)으로 응답합니다.
///
/// `week_start_date`는 그 날짜 이전(같은 날 포함)의 월요일로 맞춘 뒤 스케줄러에 넘깁니다.
pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePlanRequest>, JsonRejection>,
) -> Result<Json<GeneratePlanResponse>, AppError> {
    let Json(mut request) = payload?;
    request.week_start_date = services::week_start_monday(request.week_start_date);

    let mut rng = state.rng();
    let plan = services::plan_from_request(&request, state.slot_policy, &mut rng)?;
    let summary = services::summarize(&plan);
    Ok(Json(GeneratePlanResponse { plan, summary }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FocusTopic, LearningPace, Priority, SessionType, StudyPreferences, StudyTime,
    };
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState {
            slot_policy: SlotPolicy::Preferred,
            plan_seed: Some(7),
        }
    }

    fn request(week_start: NaiveDate, limit: u32) -> GeneratePlanRequest {
        GeneratePlanRequest {
            focus_topics: vec![
                FocusTopic {
                    id: "m1".to_string(),
                    subject: "Math".to_string(),
                    topic: "Algebra".to_string(),
                    difficulty: 3,
                    priority: Priority::High,
                    estimated_effort_minutes: 120,
                },
                FocusTopic {
                    id: "c1".to_string(),
                    subject: "Chemistry".to_string(),
                    topic: "Stoichiometry".to_string(),
                    difficulty: 4,
                    priority: Priority::Critical,
                    estimated_effort_minutes: 90,
                },
            ],
            preferences: StudyPreferences {
                learning_pace: LearningPace::Slow,
                daily_time_limit_minutes: limit,
                preferred_study_days: vec!["monday".to_string(), "thursday".to_string()],
                preferred_study_time: StudyTime::Afternoon,
                base_session_duration_minutes: 40,
                break_duration_minutes: 5,
            },
            week_start_date: week_start,
        }
    }

    #[tokio::test]
    async fn generates_plan_with_summary() {
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let Json(response) = generate_plan(State(state()), Ok(Json(request(wednesday, 120))))
            .await
            .unwrap();

        // 수요일 → 그 주 월요일로 정규화
        assert_eq!(
            response.plan.week_start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(!response.plan.sessions.is_empty());
        assert_eq!(
            response.plan.total_planned_minutes,
            response.plan.sessions.iter().map(|s| s.duration_minutes).sum::<u32>()
        );
        // 가장 우선순위가 높은 주제가 먼저, 오후 슬롯부터
        assert_eq!(response.plan.sessions[0].subject, "Chemistry");
        assert_eq!(response.plan.sessions[0].scheduled_time, "13:00");
        assert_eq!(
            response.summary.study_sessions,
            response
                .plan
                .sessions
                .iter()
                .filter(|s| s.session_type == SessionType::Study)
                .count()
        );
    }

    #[tokio::test]
    async fn seeded_state_is_deterministic() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let Json(first) = generate_plan(State(state()), Ok(Json(request(monday, 180))))
            .await
            .unwrap();
        let Json(second) = generate_plan(State(state()), Ok(Json(request(monday, 180))))
            .await
            .unwrap();
        assert_eq!(first.plan, second.plan);
    }

    #[tokio::test]
    async fn invalid_preferences_are_rejected() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = generate_plan(State(state()), Ok(Json(request(monday, 0)))).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn response_flattens_plan_fields() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let Json(response) = generate_plan(State(state()), Ok(Json(request(monday, 60))))
            .await
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["week_start_date"], "2024-01-01");
        assert_eq!(value["week_end_date"], "2024-01-07");
        assert!(value["sessions"].is_array());
        assert!(value["summary"]["days"].is_array());
        assert_eq!(value["sessions"][0]["session_type"], "study");
        assert_eq!(value["sessions"][0]["scheduled_date"], "2024-01-01");
    }
}
