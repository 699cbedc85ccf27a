//! cq-core: cquery 공통 핵심 라이브러리
//!
//! 빌더(`cq-sql`)와 클라이언트(`cq-client`), CLI가 공유하는 타입을 제공합니다.
//!
//! # 모듈 구조
//!
//! - `model`: 컬럼 모델, 레코드, 값, 결과 집합
//! - `ident`: 식별자 / 컬럼 타입 검증
//! - `error`: 공통 에러 타입

pub mod error;
pub mod ident;
pub mod model;

pub use error::{Error, IdentKind, Result};
pub use ident::{ColumnType, Ident};
pub use model::{ColumnModel, Record, ResultSet, Row, Value};
