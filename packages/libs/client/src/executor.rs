//! 문장 실행기
//!
//! - DDL / SELECT: prepared statement 없이 텍스트 프로토콜로 직접 실행
//! - INSERT: prepare → 플레이스홀더 수 확인 → 바인딩 → 실행
//! - SELECT 결과: 셀 텍스트를 컬럼 타입에 따라 `Value`로 변환 (`cell_to_value`)
//!
//! 연결 해제는 호출자(`crud`) 책임입니다.

use sqlx::mysql::{MySql, MySqlArguments, MySqlConnection, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, Either, Executor, Row, Statement, TypeInfo};

use cq_core::{Error, Result, ResultSet, Value};

use crate::error::driver_message;

/// DDL 실행
pub async fn execute_ddl(conn: &mut MySqlConnection, sql: &str) -> Result<()> {
    sqlx::raw_sql(sql)
        .execute(&mut *conn)
        .await
        .map(|_| ())
        .map_err(|e| Error::Query {
            message: driver_message(&e),
        })
}

/// Prepared INSERT 실행
///
/// 값은 `Value` 변형별 네이티브 타입으로 바인딩됩니다.
///
/// # Returns
/// 영향받은 행 수
pub async fn execute_insert(
    conn: &mut MySqlConnection,
    sql: &str,
    params: &[Value],
) -> Result<u64> {
    let stmt = (&mut *conn)
        .prepare(sql)
        .await
        .map_err(|e| Error::Prepare {
            message: driver_message(&e),
        })?;

    let expected = match stmt.parameters() {
        Some(Either::Left(types)) => types.len(),
        Some(Either::Right(count)) => count,
        None => params.len(),
    };
    if expected != params.len() {
        return Err(Error::Prepare {
            message: format!(
                "statement expects {} parameters, got {}",
                expected,
                params.len()
            ),
        });
    }

    let result = bind_values(stmt.query(), params)
        .execute(&mut *conn)
        .await
        .map_err(|e| Error::Execution {
            message: driver_message(&e),
        })?;

    Ok(result.rows_affected())
}

/// 전체 조회 실행 및 결과 변환
pub async fn execute_select_all(conn: &mut MySqlConnection, sql: &str) -> Result<ResultSet> {
    let rows = sqlx::raw_sql(sql)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| Error::Query {
            message: driver_message(&e),
        })?;

    rows_to_result_set(rows)
}

fn bind_values<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[Value],
) -> Query<'q, MySql, MySqlArguments> {
    for value in params {
        query = match value {
            Value::Null => query.bind(Option::<String>::None),
            Value::Bool(b) => query.bind(*b),
            Value::Int(i) => query.bind(*i),
            Value::Float(x) => query.bind(*x),
            Value::Text(s) => query.bind(s.clone()),
        };
    }
    query
}

fn rows_to_result_set(rows: Vec<MySqlRow>) -> Result<ResultSet> {
    let columns: Vec<String> = rows
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (idx, column) in row.columns().iter().enumerate() {
            let type_name = column.type_info().name();
            let cell = raw_cell(row, idx).and_then(|raw| cell_to_value(raw, type_name));
            cells.push(cell.map_err(|message| Error::Query {
                message: format!(
                    "failed to decode column '{}' ({}): {}",
                    column.name(),
                    type_name,
                    message
                ),
            })?);
        }
        out.push(cells);
    }

    Ok(ResultSet { columns, rows: out })
}

/// 텍스트 프로토콜 셀을 그대로 읽기 (UTF-8이 아니면 손실 변환)
fn raw_cell(row: &MySqlRow, idx: usize) -> std::result::Result<Option<String>, String> {
    match row.try_get_unchecked::<Option<String>, _>(idx) {
        Ok(text) => Ok(text),
        Err(_) => row
            .try_get_unchecked::<Option<Vec<u8>>, _>(idx)
            .map(|v| v.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
            .map_err(|e| e.to_string()),
    }
}

/// 서버가 보낸 셀 텍스트를 컬럼 타입에 맞는 값으로
///
/// - SQL NULL(`None`)만 `Value::Null`이고, 문자열 `"NULL"`은 텍스트입니다.
/// - 정수 / 실수 / BOOLEAN 컬럼은 숫자로, 나머지(DECIMAL, 날짜, 문자열 등)는 서버 표기 그대로 텍스트로 둡니다.
/// - FLOAT도 서버 표기(`1.1`)를 그대로 파싱하므로 단정밀도 확장 오차가 생기지 않습니다.
pub(crate) fn cell_to_value(
    raw: Option<String>,
    type_name: &str,
) -> std::result::Result<Value, String> {
    let Some(text) = raw else {
        return Ok(Value::Null);
    };

    let type_name = type_name.to_ascii_uppercase();
    let (base, unsigned) = match type_name.strip_suffix(" UNSIGNED") {
        Some(base) => (base, true),
        None => (type_name.as_str(), false),
    };

    let parsed = match base {
        "BOOLEAN" | "BOOL" => text
            .parse::<i64>()
            .map(|n| Value::Bool(n != 0))
            .map_err(|e| e.to_string()),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" | "BIGINT" if unsigned => text
            .parse::<u64>()
            .map(unsigned_to_value)
            .map_err(|e| e.to_string()),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" | "BIGINT" | "YEAR" => text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| e.to_string()),
        "FLOAT" | "DOUBLE" | "REAL" => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| e.to_string()),
        _ => return Ok(Value::Text(text)),
    };

    parsed.map_err(|e| format!("{:?}: {}", text, e))
}

fn unsigned_to_value(v: u64) -> Value {
    i64::try_from(v)
        .map(Value::Int)
        .unwrap_or_else(|_| Value::Text(v.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_null_and_text_null_differ() {
        assert_eq!(cell_to_value(None, "VARCHAR").unwrap(), Value::Null);
        assert_eq!(cell_to_value(None, "INT").unwrap(), Value::Null);
        assert_eq!(
            cell_to_value(Some("NULL".to_string()), "VARCHAR").unwrap(),
            Value::Text("NULL".to_string())
        );
    }

    #[test]
    fn test_float_column_keeps_server_digits() {
        assert_eq!(
            cell_to_value(Some("1.1".to_string()), "FLOAT").unwrap(),
            Value::Float(1.1)
        );
        assert_eq!(
            cell_to_value(Some("1.5".to_string()), "DOUBLE").unwrap(),
            Value::Float(1.5)
        );
    }

    #[test]
    fn test_integer_and_boolean_columns() {
        assert_eq!(
            cell_to_value(Some("30".to_string()), "INT").unwrap(),
            Value::Int(30)
        );
        assert_eq!(
            cell_to_value(Some("-7".to_string()), "bigint").unwrap(),
            Value::Int(-7)
        );
        assert_eq!(
            cell_to_value(Some("1".to_string()), "BOOLEAN").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            cell_to_value(Some("18446744073709551615".to_string()), "BIGINT UNSIGNED").unwrap(),
            Value::Text("18446744073709551615".to_string())
        );
    }

    #[test]
    fn test_other_types_stay_text() {
        for (text, type_name) in [
            ("12.50", "DECIMAL"),
            ("2024-01-02 03:04:05", "DATETIME"),
            ("2024-01-02", "DATE"),
            ("Alice", "VARCHAR"),
            ("POINT(1 2)", "GEOMETRY"),
        ] {
            assert_eq!(
                cell_to_value(Some(text.to_string()), type_name).unwrap(),
                Value::Text(text.to_string())
            );
        }
    }

    #[test]
    fn test_unparsable_numeric_cell_is_error() {
        let err = cell_to_value(Some("abc".to_string()), "INT").unwrap_err();
        assert!(err.starts_with("\"abc\""));
    }

    #[test]
    fn test_unsigned_overflow_is_text() {
        assert_eq!(unsigned_to_value(42), Value::Int(42));
        assert_eq!(
            unsigned_to_value(u64::MAX),
            Value::Text("18446744073709551615".to_string())
        );
    }
}
