// ==========================================
// 住房供给管线数据 - 目标上限校验策略
// ==========================================
// MarketedOnly: marketed ≤ required（默认）
// PerComponentAndSum: 三阶段各自 ≤ required 且合计 ≤ required
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 目标上限校验策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetBoundPolicy {
    #[default]
    MarketedOnly,
    PerComponentAndSum,
}

impl TargetBoundPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetBoundPolicy::MarketedOnly => "marketed_only",
            TargetBoundPolicy::PerComponentAndSum => "strict",
        }
    }
}

impl FromStr for TargetBoundPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "marketed_only" | "marketed" => Ok(TargetBoundPolicy::MarketedOnly),
            "strict" | "per_component_and_sum" => Ok(TargetBoundPolicy::PerComponentAndSum),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for TargetBoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            "strict".parse::<TargetBoundPolicy>(),
            Ok(TargetBoundPolicy::PerComponentAndSum)
        );
        assert_eq!(
            "marketed_only".parse::<TargetBoundPolicy>(),
            Ok(TargetBoundPolicy::MarketedOnly)
        );
        assert!("loose".parse::<TargetBoundPolicy>().is_err());
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(TargetBoundPolicy::default(), TargetBoundPolicy::MarketedOnly);
    }
}
