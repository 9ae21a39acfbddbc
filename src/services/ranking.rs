//! # 주제 순위(Topic Ranker)
//!
//! 약점 주제를 우선순위 가중치 내림차순, 같으면 난이도 내림차순으로 정렬합니다.

use std::cmp::Reverse;

use crate::models::FocusTopic;

/// 주제 목록을 스케줄링 순서로 정렬한 새 Vec을 반환합니다.
///
/// 안정 정렬(`sort_by_key`)이므로 우선순위와 난이도가 모두 같은 주제는
/// 입력 순서를 그대로 유지합니다. 빈 입력이면 빈 Vec을 돌려줍니다.
pub fn rank_topics(topics: &[FocusTopic]) -> Vec<FocusTopic> {
    let mut ranked = topics.to_vec();
    // Reverse(...): 키를 뒤집어 내림차순 정렬
    ranked.sort_by_key(|t| (Reverse(t.priority.weight()), Reverse(t.difficulty)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn topic(id: &str, difficulty: u8, priority: Priority) -> FocusTopic {
        FocusTopic {
            id: id.to_string(),
            subject: format!("subject-{id}"),
            topic: format!("topic-{id}"),
            difficulty,
            priority,
            estimated_effort_minutes: 60,
        }
    }

    fn ids(topics: &[FocusTopic]) -> Vec<&str> {
        topics.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn orders_by_priority_then_difficulty() {
        let topics = vec![
            topic("low-hard", 5, Priority::Low),
            topic("high-easy", 1, Priority::High),
            topic("critical", 2, Priority::Critical),
            topic("high-hard", 4, Priority::High),
            topic("medium", 3, Priority::Medium),
        ];

        let ranked = rank_topics(&topics);
        assert_eq!(
            ids(&ranked),
            vec!["critical", "high-hard", "high-easy", "medium", "low-hard"]
        );
    }

    #[test]
    fn full_ties_keep_input_order() {
        let topics = vec![
            topic("a", 3, Priority::High),
            topic("b", 3, Priority::High),
            topic("c", 3, Priority::High),
        ];
        assert_eq!(ids(&rank_topics(&topics)), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_yields_empty_order() {
        assert!(rank_topics(&[]).is_empty());
    }
}
