//! Table 명령어

use cq_client::{ColumnModel, ConnectParams};

use crate::input;
use crate::OutputFormat;

pub async fn create(
    params: &ConnectParams,
    table: &str,
    model: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let model: ColumnModel = input::load(model)?;

    cq_client::create_table(params, table, &model).await?;

    match format {
        OutputFormat::Text => println!("Table '{}' ready ({} columns)", table, model.len()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "table": table, "columns": model.len() })
        ),
    }
    Ok(())
}
