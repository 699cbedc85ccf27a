//! 연결 설정
//!
//! CLI 옵션이 우선이고, 없으면 환경변수(`.env` 포함)를 사용합니다.

use std::env;

use cq_client::connector::DEFAULT_PORT;
use cq_client::ConnectParams;

/// DB 연결 옵션
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DbArgs {
    /// Database host [env: CQ_DB_HOST, default: localhost]
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Database port [env: CQ_DB_PORT, default: 3306]
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Database user [env: CQ_DB_USER]
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Database password [env: CQ_DB_PASSWORD]
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Database name [env: CQ_DB_NAME]
    #[arg(long, global = true)]
    pub database: Option<String>,
}

impl DbArgs {
    /// 최종 연결 파라미터
    pub fn resolve(&self) -> anyhow::Result<ConnectParams> {
        self.resolve_with(|key| env::var(key).ok())
    }

    fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<ConnectParams> {
        let pick = |flag: &Option<String>, key: &str| flag.clone().or_else(|| lookup(key));

        let host = pick(&self.host, "CQ_DB_HOST").unwrap_or_else(|| "localhost".to_string());
        let user = pick(&self.user, "CQ_DB_USER").ok_or_else(|| {
            anyhow::anyhow!("Database user not configured. Use --user or set CQ_DB_USER")
        })?;
        let password = pick(&self.password, "CQ_DB_PASSWORD").unwrap_or_default();
        let database = pick(&self.database, "CQ_DB_NAME").ok_or_else(|| {
            anyhow::anyhow!("Database not configured. Use --database or set CQ_DB_NAME")
        })?;

        let port = match self.port {
            Some(port) => port,
            None => match lookup("CQ_DB_PORT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid CQ_DB_PORT: {}", raw))?,
                None => DEFAULT_PORT,
            },
        };

        Ok(ConnectParams::new(host, user, password, database).port(port))
    }
}
