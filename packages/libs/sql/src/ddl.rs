//! DDL 생성기
//!
//! 컬럼 모델에서 `CREATE TABLE IF NOT EXISTS` 문을 생성합니다.

use sea_query::{Alias, ColumnDef, MysqlQueryBuilder, Table as TableQuery};

use cq_core::{ColumnModel, ColumnType, Error, Ident, Result};

use crate::{terminate, DynIden};

pub struct DdlGenerator;

impl DdlGenerator {
    /// `CREATE TABLE IF NOT EXISTS` 생성
    ///
    /// 컬럼은 모델의 선언 순서를 따릅니다. 타입 문자열은 검증 후 그대로 출력됩니다.
    ///
    /// # Errors
    /// - 빈 모델: `MalformedModel`
    /// - 잘못된 테이블/컬럼명: `InvalidIdentifier`
    /// - 잘못된 타입 문자열: `InvalidColumnType`
    pub fn create_table(table: &str, model: &ColumnModel) -> Result<String> {
        let table = Ident::table(table)?;
        if model.is_empty() {
            return Err(Error::malformed(format!(
                "column model for table '{}' has no columns",
                table
            )));
        }

        let mut stmt = TableQuery::create();
        stmt.table(DynIden::new(&table)).if_not_exists();

        for (name, type_name) in model.iter() {
            let column = Ident::column(name)?;
            let column_type = ColumnType::parse(name, type_name)?;

            let mut col_def = ColumnDef::new(DynIden::new(&column));
            col_def.custom(Alias::new(column_type.as_str()));
            stmt.col(&mut col_def);
        }

        Ok(terminate(stmt.to_string(MysqlQueryBuilder)))
    }
}
