use std::io::Read;

use crate::common::*;

#[doc = "toml 파일을 읽어서 객체로 변환해주는 함수"]
/// # Arguments
/// * `file_path` - 읽을 대상 toml 파일이 존재하는 경로
///
/// # Returns
/// * Result<T, anyhow::Error> - 성공적으로 파일을 읽었을 경우에는 toml 호환 객체를 반환해준다.
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Reads one JSON document from standard input and converts it into an object."]
pub fn read_json_from_stdin<T: DeserializeOwned>() -> Result<T, anyhow::Error> {
    let mut buffer: String = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("[io_utils.rs -> read_json_from_stdin] Failed to read standard input.")?;

    let parsed: T = serde_json::from_str(&buffer)
        .context("[io_utils.rs -> read_json_from_stdin] Standard input is not valid JSON.")?;

    Ok(parsed)
}
