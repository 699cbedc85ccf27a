//! 동기 API
//!
//! 호출마다 current-thread 런타임을 만들어 비동기 연산을 끝까지 실행합니다.
//! tokio 런타임 안에서 호출하면 panic이 발생하므로 비동기 코드에서는 상위 모듈의 함수를 사용하세요.
//! 런타임 생성 실패는 `Error::Runtime`이며 연결 시도 전에 반환됩니다.

use tokio::runtime::{Builder, Runtime};

use cq_core::{ColumnModel, Error, Record, Result, ResultSet};

use crate::connector::ConnectParams;

fn runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(runtime_error)
}

fn runtime_error(e: std::io::Error) -> Error {
    Error::Runtime {
        message: format!("failed to start runtime: {}", e),
    }
}

/// [`crate::create_table`]의 동기 버전
pub fn create_table(params: &ConnectParams, table: &str, model: &ColumnModel) -> Result<()> {
    runtime()?.block_on(crate::crud::create_table(params, table, model))
}

/// [`crate::insert`]의 동기 버전
pub fn insert(params: &ConnectParams, table: &str, record: &Record) -> Result<()> {
    runtime()?.block_on(crate::crud::insert(params, table, record))
}

/// [`crate::read_all`]의 동기 버전
pub fn read_all(params: &ConnectParams, table: &str) -> Result<ResultSet> {
    runtime()?.block_on(crate::crud::read_all(params, table))
}
