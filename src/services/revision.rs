//! # 복습 주입기(Revision Injector)
//!
//! 학습 세션 사이사이에 이번 주 이미 배운 주제의 짧은 복습 세션을 끼워 넣습니다.
//!
//! - 언제: 학습 세션 수가 속도별 복습 주기(slow=2, medium=3, fast=4)의 배수가 될 때
//! - 무엇을: 지금까지 도입된 주제 중 하나를 난수원으로 고름
//! - 얼마나: 직전 학습 세션 길이의 60% (세션 길이 범위로 자름)
//!
//! 난수원은 `rand::Rng`로 주입받습니다. 테스트나 재현이 필요한 호출은
//! `StdRng::seed_from_u64()`로 시드를 고정하면 결과가 항상 같습니다.

use rand::seq::SliceRandom;
use rand::Rng;

use super::day::{DayCursor, IntroducedTopic, SchedulerState};
use super::sizing;
use crate::models::{LearningPace, SessionType, StudySession};

/// 복습 세션에 붙는 고정 난이도
pub const REVISION_DIFFICULTY: u8 = 2;

/// 복습 길이 = 직전 학습 길이 × 0.6
const REVISION_RATIO: f64 = 0.6;

/// 현재 학습 세션 수에서 복습을 할 차례인지 판단합니다.
pub fn is_revision_due(session_count: u32, pace: LearningPace) -> bool {
    session_count > 0 && session_count % pace.revision_frequency() == 0
}

pub fn revision_duration(last_study_minutes: u32) -> u32 {
    sizing::clamp_session_minutes(f64::from(last_study_minutes) * REVISION_RATIO)
}

/// 도입된 주제 중 하나를 무작위로 고릅니다. 목록이 비어 있으면 None.
pub fn pick_revision<'a, R: Rng + ?Sized>(
    introduced: &'a [IntroducedTopic],
    rng: &mut R,
) -> Option<&'a IntroducedTopic> {
    introduced.choose(rng)
}

/// 복습 세션을 0개 또는 1개 만듭니다.
///
/// 시간 한도(쉬는 시간 포함)와 남은 슬롯이 모두 허락할 때만 세션을 만들고,
/// 그 경우 학습 세션과 똑같이 슬롯과 사용 시간을 전진시킵니다.
/// 어느 조건이든 맞지 않으면 조용히 건너뜁니다.
pub fn inject_revision<R: Rng + ?Sized>(
    state: &SchedulerState,
    cursor: &mut DayCursor,
    last_study_minutes: u32,
    pace: LearningPace,
    rng: &mut R,
) -> Option<StudySession> {
    if !is_revision_due(state.session_count, pace) {
        return None;
    }
    let duration = revision_duration(last_study_minutes);
    if !cursor.has_slot() || !cursor.fits(duration) {
        return None;
    }

    let picked = pick_revision(&state.topics_introduced, rng)?;
    let slot = cursor.take_slot(duration)?;
    Some(StudySession {
        subject: picked.subject.clone(),
        topic: picked.topic.clone(),
        session_type: SessionType::Revision,
        scheduled_date: cursor.date,
        scheduled_time: slot.to_string(),
        duration_minutes: duration,
        difficulty: REVISION_DIFFICULTY,
        source_topic_id: Some(picked.topic_id.clone()),
    })
}
