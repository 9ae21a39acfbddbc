//! # 학습 선호도(Study Preferences) 모델 정의
//!
//! 학생이 설정한 스케줄링 매개변수입니다.
//! 학습 속도, 하루 학습 시간 한도, 학습 요일, 선호 시간대, 기본 세션 길이, 쉬는 시간을 담습니다.

use serde::{Deserialize, Serialize};

/// 학습 속도 — 세션 길이와 복습 빈도를 함께 조절합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPace {
    Slow,
    Medium,
    Fast,
}

impl LearningPace {
    /// 세션 길이 배율 (slow=0.7, medium=1.0, fast=1.3)
    pub fn multiplier(self) -> f64 {
        match self {
            LearningPace::Slow => 0.7,
            LearningPace::Medium => 1.0,
            LearningPace::Fast => 1.3,
        }
    }

    /// 학습 세션 몇 개마다 복습을 끼워 넣을지 결정합니다.
    ///
    /// 속도가 느릴수록 복습을 더 자주 합니다 (slow=2, medium=3, fast=4).
    pub fn revision_frequency(self) -> u32 {
        match self {
            LearningPace::Slow => 2,
            LearningPace::Medium => 3,
            LearningPace::Fast => 4,
        }
    }
}

/// 선호 학습 시간대 — 어떤 시간 슬롯 목록을 쓸지 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// 학생이 설정한 학습 선호도
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPreferences {
    pub learning_pace: LearningPace,
    /// 하루 최대 학습 시간(분). 0이면 planner가 InvalidInput으로 거부합니다.
    pub daily_time_limit_minutes: u32,
    /// 학습 요일 이름 목록 (예: ["monday", "wednesday"])
    ///
    /// 문자열 그대로 받고, 요일 이름 검증은 planner에서 한 번에 수행합니다.
    pub preferred_study_days: Vec<String>,
    pub preferred_study_time: StudyTime,
    /// 기본 세션 길이(분). 보통 20~90분
    pub base_session_duration_minutes: u32,
    /// 세션 사이 쉬는 시간(분)
    #[serde(default)]
    pub break_duration_minutes: u32,
}
