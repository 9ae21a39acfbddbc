//! # 일간 스케줄러(Day Scheduler)
//!
//! 하루(한 날짜) 분량의 세션을 시간 한도 안에서 슬롯 순서대로 채웁니다.
//!
//! ## 하루의 흐름
//! ```text
//! 슬롯과 시간이 남아 있는 동안:
//!   1. 직전 과목과 다른 첫 주제 선택 (없으면 큐 맨 앞 주제)
//!   2. 세션 길이 계산 → 한도를 넘으면 그날은 종료
//!   3. 학습 세션 배치, 주제를 큐 맨 뒤로 회전
//!   4. 복습 주입기 호출 (0개 또는 1개)
//! 마지막으로 버퍼 할당기 호출
//! ```
//!
//! 주 단위로 이어지는 상태는 `SchedulerState`에 모아
//! 주간 조립기(planner)가 소유하고 `&mut`로 빌려줍니다.

use std::collections::VecDeque;

use chrono::NaiveDate;
use rand::Rng;

use super::{buffer, revision, sizing};
use crate::models::{FocusTopic, SessionType, StudyPreferences, StudySession};

/// 이번 주에 한 번 이상 학습한 주제 — 복습 후보가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroducedTopic {
    pub subject: String,
    pub topic: String,
    /// 원래 FocusTopic의 id
    pub topic_id: String,
}

/// 한 주 동안 날짜를 넘나들며 유지되는 스케줄링 상태
#[derive(Debug, Clone, Default)]
pub struct SchedulerState {
    /// 회전 큐: 사용한 주제는 맨 뒤로 이동합니다 (라운드 로빈).
    pub ranked_topics: VecDeque<FocusTopic>,
    /// 가장 최근 학습 세션의 과목
    pub last_subject_used: Option<String>,
    /// 삽입 순서를 유지하는, 중복 없는 학습 완료 주제 목록
    pub topics_introduced: Vec<IntroducedTopic>,
    /// 이번 주 지금까지 배치한 학습 세션 수 (복습 주기 계산용)
    pub session_count: u32,
}

impl SchedulerState {
    /// 순위가 매겨진 주제 목록으로 주 시작 상태를 만듭니다.
    pub fn new(ranked_topics: Vec<FocusTopic>) -> Self {
        Self {
            ranked_topics: ranked_topics.into(),
            ..Self::default()
        }
    }

    /// 다음에 학습할 주제의 큐 인덱스
    ///
    /// 직전 과목과 다른 첫 주제를 고르고, 모두 같은 과목이면 맨 앞(0)으로 물러섭니다.
    /// 큐가 비어 있으면 None.
    pub fn next_topic_index(&self) -> Option<usize> {
        if self.ranked_topics.is_empty() {
            return None;
        }
        let rotated = self.last_subject_used.as_deref().and_then(|last| {
            self.ranked_topics.iter().position(|t| t.subject != last)
        });
        Some(rotated.unwrap_or(0))
    }

    /// `index`의 주제를 큐 맨 뒤로 옮기고, 학습 기록(과목, 도입 목록, 카운터)을 갱신합니다.
    /// 회전된 주제(이제 큐의 맨 뒤)를 빌려 돌려줍니다.
    fn record_study(&mut self, index: usize) -> Option<&FocusTopic> {
        let topic = self.ranked_topics.remove(index)?;
        self.ranked_topics.push_back(topic);
        let topic = self.ranked_topics.back()?;

        let seen = self
            .topics_introduced
            .iter()
            .any(|t| t.subject == topic.subject && t.topic == topic.topic);
        if !seen {
            self.topics_introduced.push(IntroducedTopic {
                subject: topic.subject.clone(),
                topic: topic.topic.clone(),
                topic_id: topic.id.clone(),
            });
        }
        self.last_subject_used = Some(topic.subject.clone());
        self.session_count += 1;
        Some(topic)
    }
}

/// 하루 안의 진행 상황: 사용 시간과 다음 슬롯 위치
#[derive(Debug, Clone)]
pub struct DayCursor {
    pub date: NaiveDate,
    slots: &'static [&'static str],
    next_slot: usize,
    pub time_used: u32,
    pub time_limit: u32,
    pub break_minutes: u32,
}

impl DayCursor {
    pub fn new(date: NaiveDate, slots: &'static [&'static str], prefs: &StudyPreferences) -> Self {
        Self {
            date,
            slots,
            next_slot: 0,
            time_used: 0,
            time_limit: prefs.daily_time_limit_minutes,
            break_minutes: prefs.break_duration_minutes,
        }
    }

    pub fn has_slot(&self) -> bool {
        self.next_slot < self.slots.len()
    }

    /// 세션 + 뒤따르는 쉬는 시간이 남은 한도 안에 들어가는지 확인합니다.
    pub fn fits(&self, duration: u32) -> bool {
        self.time_used
            .saturating_add(duration)
            .saturating_add(self.break_minutes)
            <= self.time_limit
    }

    /// 쉬는 시간을 제외하고 남은 시간
    pub fn leftover(&self) -> u32 {
        self.time_limit.saturating_sub(self.time_used)
    }

    /// 다음 슬롯을 차지하고 사용 시간을 `duration + break`만큼 늘립니다.
    /// 슬롯이 없으면 None.
    pub fn take_slot(&mut self, duration: u32) -> Option<&'static str> {
        let label = self.slots.get(self.next_slot).copied()?;
        self.next_slot += 1;
        self.time_used = self
            .time_used
            .saturating_add(duration)
            .saturating_add(self.break_minutes);
        Some(label)
    }

    /// 버퍼처럼 쉬는 시간 없이 슬롯만 차지합니다.
    pub fn take_slot_without_break(&mut self, duration: u32) -> Option<&'static str> {
        let label = self.slots.get(self.next_slot).copied()?;
        self.next_slot += 1;
        self.time_used = self.time_used.saturating_add(duration);
        Some(label)
    }
}

/// 한 날짜의 세션 목록을 만듭니다.
///
/// # 매개변수
/// - `date`: 배치할 날짜
/// - `prefs`: 학습 선호도 (검증을 마친 값이어야 합니다)
/// - `slots`: 그날 쓸 슬롯 라벨 목록
/// - `state`: 주 단위 회전/도입 상태 (호출 후 갱신됨)
/// - `rng`: 복습 주제 선택용 난수원
///
/// 시간 한도가 최소 세션 길이보다 작으면 학습 세션 없이 끝납니다 (에러 아님, 버퍼만 남을 수 있음).
pub fn schedule_day<R: Rng + ?Sized>(
    date: NaiveDate,
    prefs: &StudyPreferences,
    slots: &'static [&'static str],
    state: &mut SchedulerState,
    rng: &mut R,
) -> Vec<StudySession> {
    let mut cursor = DayCursor::new(date, slots, prefs);
    let mut sessions = Vec::new();

    while cursor.time_used < cursor.time_limit && cursor.has_slot() {
        let Some(index) = state.next_topic_index() else {
            break;
        };
        let duration = sizing::session_duration(
            prefs.base_session_duration_minutes,
            prefs.learning_pace,
            state.ranked_topics[index].difficulty,
        );
        // 부분 배치는 하지 않습니다.
        if !cursor.fits(duration) {
            break;
        }

        let Some(slot) = cursor.take_slot(duration) else {
            break;
        };
        let Some(topic) = state.record_study(index) else {
            break;
        };
        sessions.push(StudySession {
            subject: topic.subject.clone(),
            topic: topic.topic.clone(),
            session_type: SessionType::Study,
            scheduled_date: date,
            scheduled_time: slot.to_string(),
            duration_minutes: duration,
            difficulty: topic.difficulty,
            source_topic_id: Some(topic.id.clone()),
        });

        if let Some(revision) =
            revision::inject_revision(state, &mut cursor, duration, prefs.learning_pace, rng)
        {
            sessions.push(revision);
        }
    }

    if let Some(buffer) = buffer::allocate_buffer(&mut cursor) {
        sessions.push(buffer);
    }

    tracing::debug!(
        date = %date,
        sessions = sessions.len(),
        minutes_used = cursor.time_used,
        "scheduled study day"
    );
    sessions
}
