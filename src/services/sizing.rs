//! # 세션 길이 계산(Session Sizer)
//!
//! `round(base × 속도 배율 × 난이도 계수)`를 계산한 뒤 `[20, 90]`분으로 자릅니다.
//! 부수 효과가 없는 순수 함수들입니다.

use crate::models::LearningPace;

/// 학습/복습 세션의 최소 길이(분)
pub const MIN_SESSION_MINUTES: u32 = 20;
/// 학습/복습 세션의 최대 길이(분)
pub const MAX_SESSION_MINUTES: u32 = 90;

/// 난이도 계수: 쉬운 주제(≤2)는 짧게, 어려운 주제(≥4)는 길게
pub fn difficulty_factor(difficulty: u8) -> f64 {
    match difficulty {
        0..=2 => 0.8,
        3 => 1.0,
        _ => 1.2,
    }
}

/// 실수 분(minute) 값을 반올림하고 세션 길이 범위로 자릅니다.
pub fn clamp_session_minutes(raw: f64) -> u32 {
    // clamp 후 변환하므로 as 캐스팅이 범위를 벗어날 일이 없습니다.
    raw.round()
        .clamp(f64::from(MIN_SESSION_MINUTES), f64::from(MAX_SESSION_MINUTES)) as u32
}

/// 주제 하나에 대한 학습 세션 길이(분)를 계산합니다.
pub fn session_duration(base_minutes: u32, pace: LearningPace, difficulty: u8) -> u32 {
    let raw = f64::from(base_minutes) * pace.multiplier() * difficulty_factor(difficulty);
    clamp_session_minutes(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_pace_average_difficulty_keeps_base() {
        assert_eq!(session_duration(45, LearningPace::Medium, 3), 45);
    }

    #[test]
    fn pace_and_difficulty_scale_the_base() {
        // 45 × 0.7 × 1.2 = 37.8 → 38
        assert_eq!(session_duration(45, LearningPace::Slow, 5), 38);
        // 50 × 1.3 × 0.8 = 52
        assert_eq!(session_duration(50, LearningPace::Fast, 1), 52);
        // 40 × 1.0 × 1.2 = 48
        assert_eq!(session_duration(40, LearningPace::Medium, 4), 48);
    }

    #[test]
    fn result_is_clamped_to_session_bounds() {
        assert_eq!(session_duration(10, LearningPace::Slow, 1), MIN_SESSION_MINUTES);
        assert_eq!(session_duration(1, LearningPace::Medium, 3), MIN_SESSION_MINUTES);
        assert_eq!(session_duration(120, LearningPace::Fast, 5), MAX_SESSION_MINUTES);
        assert_eq!(session_duration(u32::MAX, LearningPace::Fast, 5), MAX_SESSION_MINUTES);
    }

    #[test]
    fn difficulty_factor_bands() {
        assert_eq!(difficulty_factor(1), 0.8);
        assert_eq!(difficulty_factor(2), 0.8);
        assert_eq!(difficulty_factor(3), 1.0);
        assert_eq!(difficulty_factor(4), 1.2);
        assert_eq!(difficulty_factor(5), 1.2);
    }
}
