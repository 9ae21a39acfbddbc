//! # 주간 계획 조립기(Weekly Plan Assembler)
//!
//! 입력을 한 번 검증한 뒤, 주의 활성 날짜마다 일간 스케줄러를 돌려
//! 세션을 모으고 `WeeklyPlan`을 만듭니다.
//!
//! ## 흐름
//! ```text
//! validate() ──▶ rank_topics() ──▶ SchedulerState::new()
//!     │
//!     └──▶ 활성 날짜마다 schedule_day() ──▶ 세션 누적 ──▶ 합계 계산
//! ```
//!
//! 주제가 없거나 활성 요일이 없으면 세션 0개짜리 계획을 돌려줍니다.
//! 이것은 에러가 아니라 정상적인 "빈 결과"입니다.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;
use thiserror::Error;

use super::day::{self, SchedulerState};
use super::ranking::rank_topics;
use super::slots::{self, SlotPolicy};
use crate::models::{FocusTopic, GeneratePlanRequest, StudyPreferences, WeeklyPlan};

/// 계획 생성 에러
///
/// 검증은 배치 전에 한 번만 수행하며, 검증을 통과한 입력에 대해
/// 배치 알고리즘 자체는 실패하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// 잘못된 입력값 (호출자의 버그 — "선호도를 확인하세요")
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl PlanError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// 요일 이름(예: "monday", " Sunday ")을 chrono의 Weekday로 변환합니다.
///
/// 대소문자와 앞뒤 공백은 무시하고, 전체 영어 요일 이름만 받습니다.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// 주어진 날짜 이전(같은 날 포함)의 가장 가까운 월요일
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// 주제와 선호도를 검증하고, 학습 요일 목록을 돌려줍니다.
pub fn validate(
    topics: &[FocusTopic],
    prefs: &StudyPreferences,
) -> Result<Vec<Weekday>, PlanError> {
    if prefs.daily_time_limit_minutes == 0 {
        return Err(PlanError::invalid(
            "daily_time_limit_minutes",
            "must be a positive number of minutes",
        ));
    }
    if prefs.base_session_duration_minutes == 0 {
        return Err(PlanError::invalid(
            "base_session_duration_minutes",
            "must be a positive number of minutes",
        ));
    }

    let days = prefs
        .preferred_study_days
        .iter()
        .map(|name| {
            parse_weekday(name).ok_or_else(|| {
                PlanError::invalid("preferred_study_days", format!("unknown weekday '{name}'"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for topic in topics {
        if !(1..=5).contains(&topic.difficulty) {
            return Err(PlanError::invalid(
                "difficulty",
                format!(
                    "topic '{}' has difficulty {}, expected 1-5",
                    topic.id, topic.difficulty
                ),
            ));
        }
        if topic.subject.trim().is_empty() || topic.topic.trim().is_empty() {
            return Err(PlanError::invalid(
                "focus_topics",
                format!("topic '{}' needs a subject and a topic name", topic.id),
            ));
        }
    }

    Ok(days)
}

/// 시작일부터 7일 중 학습 요일에 해당하는 날짜들 (시간순)
pub fn active_dates(week_start: NaiveDate, days: &[Weekday]) -> Vec<NaiveDate> {
    (0..7)
        .filter_map(|offset| week_start.checked_add_days(Days::new(offset)))
        .filter(|date| days.contains(&date.weekday()))
        .collect()
}

/// 한 주의 학습 계획을 생성합니다.
///
/// # 매개변수
/// - `topics`: 약점 주제 목록 (불변 스냅샷)
/// - `prefs`: 학습 선호도
/// - `week_start`: 주 시작일 (그대로 사용하며, 월요일 정규화는 호출자 몫)
/// - `policy`: 슬롯 목록 선택 정책
/// - `rng`: 복습 주제 선택용 난수원
///
/// # 에러
/// 입력 검증에 실패하면 `PlanError::InvalidInput`
pub fn build_weekly_plan<R: Rng + ?Sized>(
    topics: &[FocusTopic],
    prefs: &StudyPreferences,
    week_start: NaiveDate,
    policy: SlotPolicy,
    rng: &mut R,
) -> Result<WeeklyPlan, PlanError> {
    let days = validate(topics, prefs)?;
    let week_end = week_start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| PlanError::invalid("week_start_date", "date is out of range"))?;

    let mut plan = WeeklyPlan {
        week_start_date: week_start,
        week_end_date: week_end,
        total_planned_minutes: 0,
        sessions: Vec::new(),
    };

    let dates = active_dates(week_start, &days);
    if topics.is_empty() || dates.is_empty() {
        tracing::info!(
            week_start = %week_start,
            topics = topics.len(),
            active_days = dates.len(),
            "no focus topics or study days this week, returning empty plan"
        );
        return Ok(plan);
    }

    let slots = slots::slots_for(policy, prefs.preferred_study_time);
    let mut state = SchedulerState::new(rank_topics(topics));
    for date in dates {
        let sessions = day::schedule_day(date, prefs, slots, &mut state, rng);
        plan.sessions.extend(sessions);
    }
    plan.total_planned_minutes = plan.sessions.iter().map(|s| s.duration_minutes).sum();

    tracing::info!(
        week_start = %week_start,
        sessions = plan.sessions.len(),
        total_minutes = plan.total_planned_minutes,
        "generated weekly study plan"
    );
    Ok(plan)
}

/// HTTP 요청 본문으로 계획을 생성합니다. 주 시작일은 그대로 사용합니다.
pub fn plan_from_request<R: Rng + ?Sized>(
    request: &GeneratePlanRequest,
    policy: SlotPolicy,
    rng: &mut R,
) -> Result<WeeklyPlan, PlanError> {
    build_weekly_plan(
        &request.focus_topics,
        &request.preferences,
        request.week_start_date,
        policy,
        rng,
    )
}
