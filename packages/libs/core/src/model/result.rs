//! SELECT 결과 집합

use serde::{Deserialize, Serialize};

use super::value::Value;

/// 결과 행 (컬럼 순서대로)
pub type Row = Vec<Value>;

/// SELECT 결과 집합
///
/// `columns`는 첫 행에서 얻은 컬럼명입니다. 행이 없으면 비어 있습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 컬럼명으로 위치 찾기
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
