//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어옵니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값 "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값 3000)
//! - `SLOT_POLICY`: 슬롯 목록 선택 방식 — "preferred"(기본값) 또는 "evening"
//! - `PLAN_SEED`: 복습 주제 선택 난수 시드 (없으면 요청마다 무작위)

use std::env;

use anyhow::{Context, Result};

use crate::services::SlotPolicy;

/// 애플리케이션 전체 설정
///
/// 서버 시작 시 한 번 읽어온 뒤 `AppState`로 옮겨 공유합니다.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// 학생의 선호 시간대를 따를지, 항상 저녁 슬롯을 쓸지
    pub slot_policy: SlotPolicy,
    /// Some이면 모든 요청이 같은 시드로 복습 주제를 골라 결과가 재현됩니다.
    pub plan_seed: Option<u64>,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config를 생성합니다.
    ///
    /// # 에러
    /// `SLOT_POLICY`나 `PLAN_SEED`가 있는데 해석할 수 없으면 에러를 반환합니다.
    /// 잘못된 설정으로 조용히 서버가 뜨는 것보다 시작 단계에서 멈추는 편이 낫습니다.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로 설정을 만듭니다. (테스트에서 환경변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slot_policy = match lookup("SLOT_POLICY") {
            Some(raw) => raw
                .parse::<SlotPolicy>()
                .map_err(anyhow::Error::msg)
                .context("invalid SLOT_POLICY")?,
            None => SlotPolicy::default(),
        };

        let plan_seed = lookup("PLAN_SEED")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .context("PLAN_SEED must be an unsigned integer")?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            // 포트는 파싱 실패 시 기본값 3000
            port: lookup("PORT")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(3000),
            slot_policy,
            plan_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.slot_policy, SlotPolicy::Preferred);
        assert_eq!(config.plan_seed, None);
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SLOT_POLICY", "evening"),
            ("PLAN_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.slot_policy, SlotPolicy::Evening);
        assert_eq!(config.plan_seed, Some(42));
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(config_from(&[("PORT", "http")]).unwrap().port, 3000);
    }

    #[test]
    fn bad_policy_or_seed_is_an_error() {
        assert!(config_from(&[("SLOT_POLICY", "lunch")]).is_err());
        assert!(config_from(&[("PLAN_SEED", "-1")]).is_err());
    }
}
