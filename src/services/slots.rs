//! # 시간 슬롯(Time Slots)
//!
//! 하루 안에서 세션을 놓을 수 있는 고정된 슬롯 라벨 목록입니다.
//! 슬롯이 바닥나면 그날의 배치는 끝납니다.

use std::str::FromStr;

use crate::models::StudyTime;

const MORNING_SLOTS: [&str; 5] = ["07:00", "08:00", "09:00", "10:00", "11:00"];
const AFTERNOON_SLOTS: [&str; 5] = ["13:00", "14:00", "15:00", "16:00", "17:00"];
const EVENING_SLOTS: [&str; 5] = ["18:00", "19:00", "20:00", "21:00", "22:00"];
// 모든 목록은 자정 전에 끝나야 합니다. 세션 날짜는 학습일 그대로 쓰기 때문입니다.
const NIGHT_SLOTS: [&str; 5] = ["20:00", "21:00", "22:00", "23:00", "23:30"];

/// 슬롯 목록을 고르는 방식
///
/// - `Preferred`: 학생의 `preferred_study_time`에 맞는 목록 사용 (기본값)
/// - `Evening`: 선호 시간대와 상관없이 항상 저녁 목록 사용 (예전 동작)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPolicy {
    #[default]
    Preferred,
    Evening,
}

impl FromStr for SlotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preferred" => Ok(SlotPolicy::Preferred),
            "evening" => Ok(SlotPolicy::Evening),
            other => Err(format!(
                "unknown slot policy '{other}' (expected 'preferred' or 'evening')"
            )),
        }
    }
}

/// 정책과 선호 시간대에 맞는 슬롯 라벨 목록을 반환합니다.
pub fn slots_for(policy: SlotPolicy, time: StudyTime) -> &'static [&'static str] {
    let time = match policy {
        SlotPolicy::Preferred => time,
        SlotPolicy::Evening => StudyTime::Evening,
    };
    match time {
        StudyTime::Morning => &MORNING_SLOTS,
        StudyTime::Afternoon => &AFTERNOON_SLOTS,
        StudyTime::Evening => &EVENING_SLOTS,
        StudyTime::Night => &NIGHT_SLOTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn preferred_policy_follows_study_time() {
        assert_eq!(slots_for(SlotPolicy::Preferred, StudyTime::Morning)[0], "07:00");
        assert_eq!(slots_for(SlotPolicy::Preferred, StudyTime::Afternoon)[0], "13:00");
        assert_eq!(slots_for(SlotPolicy::Preferred, StudyTime::Night)[4], "23:30");
    }

    #[test]
    fn every_list_is_strictly_increasing_within_one_day() {
        for time in [
            StudyTime::Morning,
            StudyTime::Afternoon,
            StudyTime::Evening,
            StudyTime::Night,
        ] {
            let parsed: Vec<NaiveTime> = slots_for(SlotPolicy::Preferred, time)
                .iter()
                .map(|label| NaiveTime::parse_from_str(label, "%H:%M").unwrap())
                .collect();
            assert!(
                parsed.windows(2).all(|w| w[0] < w[1]),
                "{time:?} slots must not wrap past midnight"
            );
        }
    }

    #[test]
    fn evening_policy_ignores_study_time() {
        for time in [
            StudyTime::Morning,
            StudyTime::Afternoon,
            StudyTime::Evening,
            StudyTime::Night,
        ] {
            assert_eq!(slots_for(SlotPolicy::Evening, time), &EVENING_SLOTS);
        }
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("preferred".parse::<SlotPolicy>(), Ok(SlotPolicy::Preferred));
        assert_eq!(" Evening ".parse::<SlotPolicy>(), Ok(SlotPolicy::Evening));
        assert!("weekend".parse::<SlotPolicy>().is_err());
    }
}
