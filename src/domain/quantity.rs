// ==========================================
// 住房供给管线数据 - 数值类型
// ==========================================
// 校验输入中的数值字段：JSON 整数保持精确（i128 覆盖 i64 与 u64），
// 仅非整数取值以 f64 表示
// ==========================================

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// 数值字段取值
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i128),
    Float(f64),
}

impl Quantity {
    /// 从 JSON 取值构造（非数值返回 None）
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(n) = value else {
            return None;
        };
        if let Some(i) = n.as_i64() {
            Some(Quantity::Int(i128::from(i)))
        } else if let Some(u) = n.as_u64() {
            Some(Quantity::Int(i128::from(u)))
        } else {
            n.as_f64().map(Quantity::Float)
        }
    }

    /// 近似浮点值（仅用于占比、增长率等展示）
    pub fn as_f64(&self) -> f64 {
        match *self {
            Quantity::Int(i) => i as f64,
            Quantity::Float(f) => f,
        }
    }

    pub fn is_positive(&self) -> bool {
        match *self {
            Quantity::Int(i) => i > 0,
            Quantity::Float(f) => f > 0.0,
        }
    }
}

// 两侧均为整数时精确比较，否则按 f64 比较
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Quantity::Int(a), Quantity::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Quantity::Int(a), Quantity::Int(b)) => match a.checked_add(b) {
                Some(sum) => Quantity::Int(sum),
                None => Quantity::Float(a as f64 + b as f64),
            },
            _ => Quantity::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Quantity::Int(a), Quantity::Int(b)) => match a.checked_sub(b) {
                Some(diff) => Quantity::Int(diff),
                None => Quantity::Float(a as f64 - b as f64),
            },
            _ => Quantity::Float(self.as_f64() - rhs.as_f64()),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Int(i) => write!(f, "{}", i),
            Quantity::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_large_integers_compare_exactly() {
        // 2^53 与 2^53 + 1 转为 f64 后相等
        let a = Quantity::from_json(&json!(9007199254740992_i64)).unwrap();
        let b = Quantity::from_json(&json!(9007199254740993_i64)).unwrap();
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(b.to_string(), "9007199254740993");
    }

    #[test]
    fn test_u64_range_kept_exact() {
        let max = Quantity::from_json(&json!(u64::MAX)).unwrap();
        assert_eq!(max, Quantity::Int(i128::from(u64::MAX)));
        assert!(max > Quantity::Int(i128::from(i64::MAX)));
    }

    #[test]
    fn test_mixed_int_and_float() {
        let int = Quantity::Int(100);
        let float = Quantity::from_json(&json!(100.5)).unwrap();
        assert!(int < float);
        assert_eq!(Quantity::Int(100), Quantity::Float(100.0));
        assert_eq!(int + float, Quantity::Float(200.5));
    }

    #[test]
    fn test_non_number_rejected() {
        assert_eq!(Quantity::from_json(&json!("12")), None);
        assert_eq!(Quantity::from_json(&Value::Null), None);
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(Quantity::Int(600) + Quantity::Int(500), Quantity::Int(1100));
        assert_eq!(Quantity::Int(1100) - Quantity::Int(280), Quantity::Int(820));
        assert!(!Quantity::Int(0).is_positive());
    }
}
