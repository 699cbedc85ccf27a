//! 일회용 연결
//!
//! 연결은 연산 하나 동안만 살아 있습니다. 얻은 쪽이 모든 경로에서 `release`해야 합니다.

use std::fmt;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use cq_core::{Error, Result};

use crate::error::driver_message;

/// MySQL 기본 포트
pub const DEFAULT_PORT: u16 = 3306;

/// 연결 파라미터
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectParams {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl ConnectParams {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

// 비밀번호는 로그에 남기지 않음
impl fmt::Debug for ConnectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"****")
            .field("database", &self.database)
            .finish()
    }
}

/// 새 연결 생성
///
/// 실패 시 드라이버 메시지를 담은 `Error::Connection`을 반환합니다.
pub async fn connect(params: &ConnectParams) -> Result<MySqlConnection> {
    tracing::debug!(
        "Connecting to {}:{}/{} as {}",
        params.host,
        params.port,
        params.database,
        params.user
    );

    MySqlConnection::connect_with(&params.options())
        .await
        .map_err(|e| Error::Connection {
            message: driver_message(&e),
        })
}

/// 연결 해제
///
/// 종료 핸드셰이크 실패는 로그만 남깁니다. 소켓은 어느 경우든 닫힙니다.
pub async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close connection cleanly: {}", e);
    }
}
