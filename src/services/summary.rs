//! # 계획 요약(Plan Summary)
//!
//! 생성된 주간 계획을 대시보드가 바로 쓸 수 있는 숫자로 요약합니다.
//! - 날짜별 총 학습 시간과 세션 수
//! - 과목별 학습+복습 시간 (버퍼 제외)
//! - 세션 종류별 개수

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{SessionType, WeeklyPlan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub minutes: u32,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectMinutes {
    pub subject: String,
    pub minutes: u32,
}

/// 주간 계획 요약
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// 세션이 있는 날만, 시간순
    pub days: Vec<DaySummary>,
    /// 시간 내림차순, 같으면 과목 이름순
    pub subjects: Vec<SubjectMinutes>,
    pub study_sessions: usize,
    pub revision_sessions: usize,
    pub buffer_sessions: usize,
}

pub fn summarize(plan: &WeeklyPlan) -> PlanSummary {
    let mut summary = PlanSummary::default();
    // BTreeMap: 키(날짜) 순서로 정렬된 맵
    let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();
    let mut subjects: BTreeMap<&str, u32> = BTreeMap::new();

    for session in &plan.sessions {
        let day = days.entry(session.scheduled_date).or_insert(DaySummary {
            date: session.scheduled_date,
            minutes: 0,
            sessions: 0,
        });
        day.minutes += session.duration_minutes;
        day.sessions += 1;

        match session.session_type {
            SessionType::Study => summary.study_sessions += 1,
            SessionType::Revision => summary.revision_sessions += 1,
            SessionType::Buffer => {
                summary.buffer_sessions += 1;
                continue;
            }
        }
        *subjects.entry(session.subject.as_str()).or_insert(0) += session.duration_minutes;
    }

    summary.days = days.into_values().collect();
    summary.subjects = subjects
        .into_iter()
        .map(|(subject, minutes)| SubjectMinutes {
            subject: subject.to_string(),
            minutes,
        })
        .collect();
    // 안정 정렬: 같은 시간이면 BTreeMap의 과목 이름순이 유지됩니다.
    summary.subjects.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    summary
}
