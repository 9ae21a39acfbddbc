//! # 약점 주제(Focus Topic) 모델 정의
//!
//! 학생이 스스로 "약하다"고 보고한 과목/주제 쌍을 표현합니다.
//! 스케줄러는 호출 시점의 주제 목록을 불변 입력(snapshot)으로 취급합니다.

use serde::{Deserialize, Serialize};

/// 주제 우선순위 — JSON에서는 `"low" | "medium" | "high" | "critical"` 문자열입니다.
///
/// `rename_all = "lowercase"`: variant 이름을 소문자로 바꿔 직렬화합니다.
/// 목록에 없는 문자열은 역직렬화 단계에서 거부됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// 정렬에 쓰는 가중치 (critical=4 ... low=1)
    ///
    /// match는 모든 variant를 빠짐없이 처리해야 하므로,
    /// 새 우선순위가 추가되면 여기서 컴파일 에러가 납니다.
    pub fn weight(self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// 약점 주제 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusTopic {
    /// 불투명(opaque) 식별자 — 학습 세션의 `source_topic_id`로 되돌아갑니다.
    pub id: String,
    /// 과목 이름 (예: "Math")
    pub subject: String,
    /// 세부 주제 (예: "Algebra")
    pub topic: String,
    /// 난이도 1~5 (범위 검증은 planner에서 수행)
    pub difficulty: u8,
    pub priority: Priority,
    /// 예상 학습량(분). 참고용이며 세션 길이 계산에는 쓰지 않습니다.
    #[serde(default)]
    pub estimated_effort_minutes: u32,
}
