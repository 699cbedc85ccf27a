//! 공통 에러 타입
//!
//! 빌더, 커넥터, 실행기가 모두 이 에러 타입을 사용합니다.
//! DB 드라이버의 진단 메시지는 가공 없이 `message`에 담깁니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// cquery 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Model Errors (호출자 버그)
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("malformed model: {message}")]
    MalformedModel { message: String },

    #[error("invalid {kind} identifier: {name:?}")]
    InvalidIdentifier { kind: IdentKind, name: String },

    #[error("invalid column type for '{column}': {type_name:?}")]
    InvalidColumnType { column: String, type_name: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Database Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("connection error: {message}")]
    Connection { message: String },

    #[error("prepare error: {message}")]
    Prepare { message: String },

    #[error("execution error: {message}")]
    Execution { message: String },

    #[error("query error: {message}")]
    Query { message: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Local Errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// 동기 API용 비동기 런타임을 만들지 못함 (DB와 무관)
    #[error("runtime error: {message}")]
    Runtime { message: String },
}

/// 식별자 종류 (에러 메시지용)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentKind {
    Table,
    Column,
}

impl std::fmt::Display for IdentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentKind::Table => f.write_str("table"),
            IdentKind::Column => f.write_str("column"),
        }
    }
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedModel {
            message: message.into(),
        }
    }

    /// 호출자 입력 문제인지 (DB에 도달하기 전에 실패)
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedModel { .. }
                | Error::InvalidIdentifier { .. }
                | Error::InvalidColumnType { .. }
        )
    }

    /// 에러 코드 (클라이언트용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedModel { .. } => "MALFORMED_MODEL",
            Error::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            Error::InvalidColumnType { .. } => "INVALID_COLUMN_TYPE",
            Error::Connection { .. } => "CONNECTION_ERROR",
            Error::Prepare { .. } => "PREPARE_ERROR",
            Error::Execution { .. } => "EXECUTION_ERROR",
            Error::Query { .. } => "QUERY_ERROR",
            Error::Runtime { .. } => "RUNTIME_ERROR",
        }
    }
}
