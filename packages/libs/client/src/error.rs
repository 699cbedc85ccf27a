//! sqlx 에러 변환

/// 드라이버 진단 메시지
///
/// 서버가 거부한 경우 서버 메시지를 그대로, 그 외에는 sqlx 에러 문자열을 사용합니다.
pub(crate) fn driver_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}
