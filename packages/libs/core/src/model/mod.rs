//! 컬럼 모델 / 레코드 / 결과 집합
//!
//! # 모듈 구조
//!
//! - `column`: `CREATE TABLE`을 만드는 컬럼 모델 (컬럼명 → 타입)
//! - `record`: `INSERT`할 한 행 (컬럼명 → 값)
//! - `value`: 스칼라 값 (레코드 값, 결과 셀 공용)
//! - `result`: `SELECT` 결과 집합
//!
//! 컬럼 모델과 레코드는 삽입 순서를 보존하는 맵(`IndexMap`)입니다. 순서가 곧 SQL의 컬럼 순서입니다.
//! 문서(JSON/YAML)에서 읽을 때 같은 키가 두 번 나오면 거부합니다.

mod column;
mod record;
mod result;
mod unique;
mod value;

pub use column::ColumnModel;
pub use record::Record;
pub use result::{ResultSet, Row};
pub use value::Value;
