//! 모델 / 레코드 입력 로드
//!
//! - 인라인 JSON: `'{"id": "INT"}'`
//! - 파일: `@model.json`, `@model.yaml` (확장자로 형식 결정)

use std::path::Path;

use serde::de::DeserializeOwned;

/// 인라인 JSON 또는 `@파일` 로드
pub fn load<T: DeserializeOwned>(arg: &str) -> anyhow::Result<T> {
    match arg.strip_prefix('@') {
        Some(path) => load_file(Path::new(path)),
        None => {
            serde_json::from_str(arg).map_err(|e| anyhow::anyhow!("Invalid JSON input: {}", e))
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
    parse(path, &content)
}

fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> anyhow::Result<T> {
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid YAML in {}: {}", path.display(), e))
    } else {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid JSON in {}: {}", path.display(), e))
    }
}
