//! 레코드 (INSERT 한 행)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Value;
use crate::error::{Error, Result};

/// 레코드 (컬럼명 → 값)
///
/// 키 순서가 INSERT 컬럼 순서이자 바인딩 순서입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(
    #[serde(deserialize_with = "super::unique::deserialize")] IndexMap<String, Value>,
);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값 설정 (이미 있으면 값만 교체)
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(column.into(), value.into());
        self
    }

    /// 값 추가, 이미 있는 컬럼이면 `MalformedModel`
    pub fn try_insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let column = column.into();
        if self.0.contains_key(&column) {
            return Err(Error::malformed(format!("duplicate column '{}'", column)));
        }
        self.0.insert(column, value.into());
        Ok(())
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (Into::<String>::into(k), Into::<Value>::into(v)))
                .collect(),
        )
    }
}
