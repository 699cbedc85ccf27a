//! 공개 CRUD 연산
//!
//! 각 연산의 순서:
//! 1. SQL 생성 및 검증 (연결 전. 입력 오류로는 연결을 열지 않음)
//! 2. 연결
//! 3. 실행
//! 4. 성공/실패와 관계없이 연결 해제
//!
//! 실패는 `Result`로 돌려주고 여기서는 `debug!`로만 남깁니다. 사용자에게 보여줄지는 호출자가 정합니다.

use cq_core::{ColumnModel, Record, Result, ResultSet};
use cq_sql::{DdlGenerator, InsertBuilder, SelectBuilder};

use crate::connector::{self, ConnectParams};
use crate::executor;

/// 컬럼 모델로 테이블 생성 (`IF NOT EXISTS`, 반복 호출해도 안전)
pub async fn create_table(params: &ConnectParams, table: &str, model: &ColumnModel) -> Result<()> {
    let result = async {
        let sql = DdlGenerator::create_table(table, model)?;
        tracing::debug!("create_table: {}", sql);

        let mut conn = connector::connect(params).await?;
        let result = executor::execute_ddl(&mut conn, &sql).await;
        connector::release(conn).await;
        result
    }
    .await;

    traced("create_table", table, result)
}

/// 레코드 한 행 삽입
pub async fn insert(params: &ConnectParams, table: &str, record: &Record) -> Result<()> {
    let result = async {
        let (sql, values) = InsertBuilder::new(table).build(record)?;
        tracing::debug!("insert: {} ({} params)", sql, values.len());

        let mut conn = connector::connect(params).await?;
        let result = executor::execute_insert(&mut conn, &sql, &values).await;
        connector::release(conn).await;
        result
    }
    .await;

    traced("insert", table, result).map(|affected| {
        tracing::debug!("insert into '{}': {} row(s) affected", table, affected);
    })
}

/// 테이블 전체 조회
pub async fn read_all(params: &ConnectParams, table: &str) -> Result<ResultSet> {
    let result = async {
        let sql = SelectBuilder::new(table).build()?;
        tracing::debug!("read_all: {}", sql);

        let mut conn = connector::connect(params).await?;
        let result = executor::execute_select_all(&mut conn, &sql).await;
        connector::release(conn).await;
        result
    }
    .await;

    let rs = traced("read_all", table, result)?;
    tracing::debug!("read_all '{}': {} row(s)", table, rs.len());
    Ok(rs)
}

fn traced<T>(op: &str, table: &str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        tracing::debug!(code = e.code(), "{} '{}' failed: {}", op, table, e);
    }
    result
}
