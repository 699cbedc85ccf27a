//! Record 명령어

use cq_client::{ConnectParams, Record, ResultSet};

use crate::input;
use crate::OutputFormat;

pub async fn insert(
    params: &ConnectParams,
    table: &str,
    record: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let record: Record = input::load(record)?;

    cq_client::insert(params, table, &record).await?;

    match format {
        OutputFormat::Text => println!("Inserted 1 row into '{}'", table),
        OutputFormat::Json => println!("{}", serde_json::json!({ "table": table, "inserted": 1 })),
    }
    Ok(())
}

pub async fn read_all(
    params: &ConnectParams,
    table: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rs = cq_client::read_all(params, table).await?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&rs)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rs)?),
    }
    Ok(())
}

/// 탭 구분 텍스트 (첫 줄은 컬럼명)
fn render_text(rs: &ResultSet) -> String {
    let mut out = String::new();
    if !rs.columns.is_empty() {
        out.push_str(&rs.columns.join("\t"));
        out.push('\n');
    }
    for row in &rs.rows {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cq_client::Value;

    #[test]
    fn test_render_text() {
        let rs = ResultSet {
            columns: vec!["id".to_string(), "name".to_string()],
            rows: vec![
                vec![Value::Int(1), Value::from("Alice")],
                vec![Value::Int(2), Value::Null],
            ],
        };
        assert_eq!(render_text(&rs), "id\tname\n1\tAlice\n2\tNULL\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_text(&ResultSet::default()), "");
    }
}
