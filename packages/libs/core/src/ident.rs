//! 식별자 / 컬럼 타입 검증
//!
//! 테이블명, 컬럼명, 컬럼 타입 문자열은 SQL 본문에 들어가므로
//! 허용 문자 목록(allow-list)으로 검증합니다. 값은 항상 바인딩으로 전달되므로
//! 여기서 다루지 않습니다.

use crate::error::{Error, IdentKind, Result};

/// MySQL 식별자 최대 길이
pub const MAX_IDENT_LEN: usize = 64;

/// 컬럼 타입 문자열 최대 길이
pub const MAX_COLUMN_TYPE_LEN: usize = 255;

/// 검증된 식별자
///
/// `[A-Za-z_][A-Za-z0-9_$]*`, 최대 64자.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    /// 테이블 식별자
    pub fn table(name: &str) -> Result<Self> {
        Self::parse(IdentKind::Table, name)
    }

    /// 컬럼 식별자
    pub fn column(name: &str) -> Result<Self> {
        Self::parse(IdentKind::Column, name)
    }

    fn parse(kind: IdentKind, name: &str) -> Result<Self> {
        if is_valid_ident(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidIdentifier {
                kind,
                name: name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    name.len() <= MAX_IDENT_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// 검증된 컬럼 타입 문자열
///
/// `INT AUTO_INCREMENT PRIMARY KEY`, `DECIMAL(10,2) NOT NULL` 같은 형태는 허용하고,
/// 따옴표/세미콜론/주석 시작 문자는 거부합니다. 그대로 SQL에 출력됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType(String);

impl ColumnType {
    pub fn parse(column: &str, type_name: &str) -> Result<Self> {
        if is_valid_column_type(type_name) {
            Ok(Self(type_name.trim().to_string()))
        } else {
            Err(Error::InvalidColumnType {
                column: column.to_string(),
                type_name: type_name.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_column_type(type_name: &str) -> bool {
    let trimmed = type_name.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_COLUMN_TYPE_LEN {
        return false;
    }

    let mut depth: usize = 0;
    for c in trimmed.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            c if c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == ',' => {}
            _ => return false,
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in ["users", "_tmp", "Order2", "price$usd", "a"] {
            assert!(Ident::table(name).is_ok(), "{name} should be valid");
        }
        let max = "a".repeat(MAX_IDENT_LEN);
        assert!(Ident::column(&max).is_ok());
    }

    #[test]
    fn test_rejects_metacharacters() {
        for name in [
            "",
            "users;",
            "users; DROP TABLE x",
            "it's",
            "\"quoted\"",
            "back`tick",
            "with space",
            "1users",
            "dash-name",
            "名前",
        ] {
            let err = Ident::column(name).unwrap_err();
            assert_eq!(err.code(), "INVALID_IDENTIFIER", "{name:?} should be rejected");
        }
        assert!(Ident::table(&"a".repeat(MAX_IDENT_LEN + 1)).is_err());
    }

    #[test]
    fn test_identifier_kind_in_error() {
        match Ident::table("bad;").unwrap_err() {
            Error::InvalidIdentifier { kind, name } => {
                assert_eq!(kind, IdentKind::Table);
                assert_eq!(name, "bad;");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_column_types() {
        for ty in [
            "INT",
            "INT AUTO_INCREMENT PRIMARY KEY",
            "VARCHAR(255)",
            "DECIMAL(10,2) NOT NULL",
            "DECIMAL(10, 2)",
            "  TEXT  ",
        ] {
            assert!(ColumnType::parse("c", ty).is_ok(), "{ty:?} should be valid");
        }
        assert_eq!(ColumnType::parse("c", "  TEXT  ").unwrap().as_str(), "TEXT");
    }

    #[test]
    fn test_rejects_bad_column_types() {
        for ty in [
            "",
            "   ",
            "INT; DROP TABLE users",
            "VARCHAR(255",
            "INT)",
            "TEXT DEFAULT 'x'",
            "INT -- comment",
            "INT /* c */",
            "INT # c",
            "INT`",
        ] {
            let err = ColumnType::parse("c", ty).unwrap_err();
            assert_eq!(err.code(), "INVALID_COLUMN_TYPE", "{ty:?} should be rejected");
        }
    }
}
