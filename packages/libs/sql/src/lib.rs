//! cq-sql: 컬럼 모델 / 레코드 기반 SQL 생성 라이브러리
//!
//! SeaQuery(`MysqlQueryBuilder`)로 SQL을 생성합니다.
//! 식별자는 검증 후 백틱으로 인용하고, 값은 항상 `?` 플레이스홀더로 바인딩합니다.
//!
//! # 모듈 구조
//!
//! - `builder`: INSERT / SELECT 빌더
//! - `ddl`: DDL(CREATE TABLE) 생성기

pub mod builder;
pub mod ddl;

pub use builder::{InsertBuilder, SelectBuilder};
pub use ddl::DdlGenerator;

/// 동적 테이블/컬럼 식별자
#[derive(Debug, Clone)]
pub(crate) struct DynIden(String);

impl DynIden {
    pub(crate) fn new(ident: &cq_core::Ident) -> Self {
        Self(ident.as_str().to_string())
    }
}

impl sea_query::Iden for DynIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        write!(s, "{}", self.0).unwrap();
    }
}

/// 문장 끝 세미콜론
pub(crate) fn terminate(mut sql: String) -> String {
    sql.push(';');
    sql
}
