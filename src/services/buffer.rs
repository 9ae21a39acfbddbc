//! # 버퍼 할당기(Buffer Allocator)
//!
//! 하루 배치가 끝난 뒤 남은 시간이 15분 이상이면
//! 자유 보충 세션 하나(최대 30분)를 붙입니다.

use super::day::DayCursor;
use crate::models::{SessionType, StudySession};

pub const BUFFER_SUBJECT: &str = "Flexible";
pub const BUFFER_TOPIC: &str = "Catch-up or extra practice";
pub const BUFFER_DIFFICULTY: u8 = 1;

/// 이보다 적게 남으면 버퍼를 만들지 않습니다.
const MIN_BUFFER_MINUTES: u32 = 15;
const MAX_BUFFER_MINUTES: u32 = 30;

/// 남은 시간과 슬롯이 충분하면 버퍼 세션을 만듭니다.
pub fn allocate_buffer(cursor: &mut DayCursor) -> Option<StudySession> {
    let leftover = cursor.leftover();
    if leftover < MIN_BUFFER_MINUTES || !cursor.has_slot() {
        return None;
    }

    let duration = leftover.min(MAX_BUFFER_MINUTES);
    let slot = cursor.take_slot_without_break(duration)?;
    Some(StudySession {
        subject: BUFFER_SUBJECT.to_string(),
        topic: BUFFER_TOPIC.to_string(),
        session_type: SessionType::Buffer,
        scheduled_date: cursor.date,
        scheduled_time: slot.to_string(),
        duration_minutes: duration,
        difficulty: BUFFER_DIFFICULTY,
        source_topic_id: None,
    })
}
