//! CRUD SQL 빌더
//!
//! 레코드를 받아 `?` 플레이스홀더 INSERT와 바인딩할 값 목록을 생성합니다.
//! 값은 SQL 문자열에 절대 들어가지 않습니다.

use sea_query::{Asterisk, Expr, MysqlQueryBuilder, Query};

use cq_core::{Error, Ident, Record, Result, Value};

use crate::{terminate, DynIden};

/// SELECT 쿼리 빌더 (전체 조회)
pub struct SelectBuilder<'a> {
    table: &'a str,
}

impl<'a> SelectBuilder<'a> {
    pub fn new(table: &'a str) -> Self {
        Self { table }
    }

    /// `SELECT * FROM <table>;`
    pub fn build(&self) -> Result<String> {
        let table = Ident::table(self.table)?;

        let mut query = Query::select();
        query.column(Asterisk).from(DynIden::new(&table));

        Ok(terminate(query.to_string(MysqlQueryBuilder)))
    }
}

/// INSERT 쿼리 빌더
pub struct InsertBuilder<'a> {
    table: &'a str,
}

impl<'a> InsertBuilder<'a> {
    pub fn new(table: &'a str) -> Self {
        Self { table }
    }

    /// SQL 생성
    ///
    /// # Returns
    /// (SQL 문자열, 바인딩할 값들). 값 순서는 레코드의 키 순서와 같습니다.
    pub fn build(&self, record: &Record) -> Result<(String, Vec<Value>)> {
        let table = Ident::table(self.table)?;
        if record.is_empty() {
            return Err(Error::malformed(format!(
                "record for table '{}' has no columns",
                table
            )));
        }

        let mut columns = Vec::with_capacity(record.len());
        let mut exprs = Vec::with_capacity(record.len());
        let mut params = Vec::with_capacity(record.len());

        for (col, val) in record.iter() {
            columns.push(DynIden::new(&Ident::column(col)?));
            exprs.push(value_to_expr(val));
            params.push(val.clone());
        }

        let mut query = Query::insert();
        query
            .into_table(DynIden::new(&table))
            .columns(columns)
            .values(exprs)
            .map_err(|e| Error::malformed(e.to_string()))?;

        let (sql, values) = query.build(MysqlQueryBuilder);
        debug_assert_eq!(values.0.len(), params.len());

        Ok((terminate(sql), params))
    }
}

/// Value를 SeaQuery Expr로 변환
fn value_to_expr(value: &Value) -> sea_query::SimpleExpr {
    match value {
        Value::Null => Expr::val(Option::<String>::None).into(),
        Value::Bool(b) => Expr::val(*b).into(),
        Value::Int(i) => Expr::val(*i).into(),
        Value::Float(x) => Expr::val(*x).into(),
        Value::Text(s) => Expr::val(s.as_str()).into(),
    }
}
