//! 실제 MySQL 대상 테스트
//!
//! 기본으로는 건너뜁니다. `CQ_TEST_DB_HOST`를 설정하고 `cargo test -- --ignored`로 실행하세요.
//! (`CQ_TEST_DB_PORT`, `CQ_TEST_DB_USER`, `CQ_TEST_DB_PASSWORD`, `CQ_TEST_DB_NAME`)

use cq_client::{connector, executor, ColumnModel, ConnectParams, Record, Value};

fn test_params() -> ConnectParams {
    let host = std::env::var("CQ_TEST_DB_HOST").expect("CQ_TEST_DB_HOST must be set for live tests");
    let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());

    let port = var("CQ_TEST_DB_PORT", "3306").parse().unwrap_or(3306);
    ConnectParams::new(
        host,
        var("CQ_TEST_DB_USER", "root"),
        var("CQ_TEST_DB_PASSWORD", ""),
        var("CQ_TEST_DB_NAME", "test_db"),
    )
    .port(port)
}

fn table_name(suffix: &str) -> String {
    format!("cq_test_{}_{}", std::process::id(), suffix)
}

async fn drop_table(params: &ConnectParams, table: &str) {
    let mut conn = connector::connect(params).await.unwrap();
    executor::execute_ddl(&mut conn, &format!("DROP TABLE IF EXISTS `{}`", table))
        .await
        .unwrap();
    connector::release(conn).await;
}

fn text_model() -> ColumnModel {
    ColumnModel::new().column("a", "VARCHAR(32)").column("b", "VARCHAR(32)")
}

#[tokio::test]
#[ignore = "requires CQ_TEST_DB_HOST"]
async fn test_round_trip() {
    let params = test_params();
    let table = table_name("round_trip");

    cq_client::create_table(&params, &table, &text_model()).await.unwrap();
    cq_client::insert(&params, &table, &Record::new().set("a", "1").set("b", "2"))
        .await
        .unwrap();

    let rs = cq_client::read_all(&params, &table).await.unwrap();
    assert_eq!(rs.columns, vec!["a".to_string(), "b".to_string()]);
    assert!(rs.rows.contains(&vec![Value::from("1"), Value::from("2")]));

    drop_table(&params, &table).await;
}

#[tokio::test]
#[ignore = "requires CQ_TEST_DB_HOST"]
async fn test_create_table_is_idempotent() {
    let params = test_params();
    let table = table_name("idempotent");

    cq_client::create_table(&params, &table, &text_model()).await.unwrap();
    cq_client::create_table(&params, &table, &text_model()).await.unwrap();

    drop_table(&params, &table).await;
}

#[tokio::test]
#[ignore = "requires CQ_TEST_DB_HOST"]
async fn test_null_is_distinct_from_text_null() {
    let params = test_params();
    let table = table_name("nulls");

    cq_client::create_table(&params, &table, &text_model()).await.unwrap();
    let record = Record::new().set("a", Value::Null).set("b", "NULL");
    cq_client::insert(&params, &table, &record).await.unwrap();

    let rs = cq_client::read_all(&params, &table).await.unwrap();
    assert_eq!(rs.rows, vec![vec![Value::Null, Value::from("NULL")]]);

    drop_table(&params, &table).await;
}

#[tokio::test]
#[ignore = "requires CQ_TEST_DB_HOST"]
async fn test_typed_columns() {
    let params = test_params();
    let table = table_name("typed");
    let model = ColumnModel::new()
        .column("id", "INT AUTO_INCREMENT PRIMARY KEY")
        .column("name", "VARCHAR(255)")
        .column("age", "INT")
        .column("score", "DOUBLE")
        .column("ratio", "FLOAT");

    cq_client::create_table(&params, &table, &model).await.unwrap();
    let record = Record::new()
        .set("id", Value::Null)
        .set("name", "Alice")
        .set("age", 30i64)
        .set("score", 1.5)
        .set("ratio", 1.1);
    cq_client::insert(&params, &table, &record).await.unwrap();

    let rs = cq_client::read_all(&params, &table).await.unwrap();
    assert_eq!(rs.len(), 1);
    assert_eq!(
        rs.rows[0],
        vec![
            Value::Int(1),
            Value::from("Alice"),
            Value::Int(30),
            Value::Float(1.5),
            Value::Float(1.1)
        ]
    );

    drop_table(&params, &table).await;
}

#[tokio::test]
#[ignore = "requires CQ_TEST_DB_HOST"]
async fn test_server_errors_are_classified() {
    let params = test_params();
    let table = table_name("errors");
    let model = ColumnModel::new().column("id", "INT PRIMARY KEY");
    cq_client::create_table(&params, &table, &model).await.unwrap();

    // 중복 키: 실행 단계 실패
    let record = Record::new().set("id", 1i64);
    cq_client::insert(&params, &table, &record).await.unwrap();
    let err = cq_client::insert(&params, &table, &record).await.unwrap_err();
    assert_eq!(err.code(), "EXECUTION_ERROR");

    // 없는 컬럼: prepare 단계 실패
    let record = Record::new().set("missing", 1i64);
    let err = cq_client::insert(&params, &table, &record).await.unwrap_err();
    assert_eq!(err.code(), "PREPARE_ERROR");

    drop_table(&params, &table).await;

    let err = cq_client::read_all(&params, &table).await.unwrap_err();
    assert_eq!(err.code(), "QUERY_ERROR");
}
