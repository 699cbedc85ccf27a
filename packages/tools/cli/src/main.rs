//! cquery CLI (`cq`)
//!
//! 컬럼 모델 / 레코드(JSON, YAML)로 MySQL 테이블을 만들고, 행을 넣고, 전체를 조회합니다.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod input;

use config::DbArgs;

#[derive(Parser)]
#[command(name = "cq")]
#[command(author, version, about = "cquery - model-driven CRUD for MySQL", long_about = None)]
struct Cli {
    #[command(flatten)]
    db: DbArgs,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a table from a column model (no-op if it already exists)
    CreateTable {
        /// Table name
        table: String,

        /// Column model: inline JSON object, or @path to a .json/.yaml file
        #[arg(long)]
        model: String,
    },

    /// Insert one record
    Insert {
        /// Table name
        table: String,

        /// Record: inline JSON object, or @path to a .json/.yaml file
        #[arg(long)]
        record: String,
    },

    /// Read all rows of a table
    ReadAll {
        /// Table name
        table: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화 (stdout은 결과 출력용)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cq=info,cq_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 연결 파라미터 결정 (CLI 옵션 > 환경변수)
    let params = cli.db.resolve()?;
    tracing::debug!("Resolved connection: {:?}", params);

    // 명령 실행
    match cli.command {
        Commands::CreateTable { table, model } => {
            commands::table::create(&params, &table, &model, cli.format).await
        }
        Commands::Insert { table, record } => {
            commands::record::insert(&params, &table, &record, cli.format).await
        }
        Commands::ReadAll { table } => {
            commands::record::read_all(&params, &table, cli.format).await
        }
    }
}
