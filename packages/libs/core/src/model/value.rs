//! 스칼라 값

use std::fmt;

use serde::{Deserialize, Serialize};

/// 스칼라 값
///
/// 레코드 값과 결과 셀에 공통으로 사용합니다.
/// SQL NULL은 `Value::Null`이며 문자열 `"NULL"`(`Value::Text`)과 구분됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// 텍스트 출력용. NULL은 `NULL`로 표시됩니다.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_text_null() {
        assert_ne!(Value::Null, Value::Text("NULL".to_string()));
        assert!(Value::Null.is_null());
        assert!(!Value::from("NULL").is_null());
    }

    #[test]
    fn test_json_mapping() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, true, 30, 1.5, "Alice", "NULL"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(30),
                Value::Float(1.5),
                Value::Text("Alice".to_string()),
                Value::Text("NULL".to_string()),
            ]
        );

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,30,1.5,"Alice","NULL"]"#);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }
}
