//! 컬럼 모델

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 컬럼 모델 (컬럼명 → 컬럼 타입)
///
/// 모든 항목이 컬럼입니다. 테이블명은 모델에 넣지 않고 호출 시 따로 전달합니다.
/// JSON/YAML에서 같은 컬럼이 두 번 나오면 역직렬화가 실패합니다.
///
/// # 예시
///
/// ```json
/// { "id": "INT AUTO_INCREMENT PRIMARY KEY", "name": "VARCHAR(255)", "age": "INT" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnModel(
    #[serde(deserialize_with = "super::unique::deserialize")] IndexMap<String, String>,
);

impl ColumnModel {
    /// 빈 모델
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬럼 추가 (이미 있으면 자리는 그대로 두고 타입만 교체)
    pub fn column(mut self, name: impl Into<String>, column_type: impl Into<String>) -> Self {
        self.0.insert(name.into(), column_type.into());
        self
    }

    /// 컬럼 추가, 이미 있는 컬럼이면 `MalformedModel`
    pub fn try_insert(
        &mut self,
        name: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(Error::malformed(format!("duplicate column '{}'", name)));
        }
        self.0.insert(name, column_type.into());
        Ok(())
    }

    /// 컬럼 타입 조회
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// (컬럼명, 타입)을 선언 순서대로
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, T: Into<String>> FromIterator<(K, T)> for ColumnModel {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, t)| (Into::<String>::into(k), Into::<String>::into(t)))
                .collect(),
        )
    }
}
