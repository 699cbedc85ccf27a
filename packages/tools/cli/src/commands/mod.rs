//! CLI 명령어 구현

pub mod record;
pub mod table;
