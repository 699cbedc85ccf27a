//! cq-client: 컬럼 모델 기반 MySQL CRUD
//!
//! 호출마다 연결을 하나 열고, 문장 하나를 실행하고, 반환 전에 연결을 닫습니다.
//! 풀링이나 재시도는 하지 않습니다.
//!
//! # 모듈 구조
//!
//! - `connector`: 일회용 연결 생성 / 해제
//! - `executor`: DDL 실행, prepared INSERT, SELECT 결과 변환
//! - `crud`: 공개 연산 (`create_table`, `insert`, `read_all`)
//! - `blocking`: 동기 래퍼

pub mod blocking;
pub mod connector;
pub mod crud;
pub mod executor;

mod error;

pub use connector::ConnectParams;
pub use crud::{create_table, insert, read_all};

pub use cq_core::{ColumnModel, Error, Record, Result, ResultSet, Row, Value};
