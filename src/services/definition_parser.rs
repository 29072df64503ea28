// 定義ファイルパーサーサービス
//
// YAMLのテーブル定義ファイルを読み込み、検証済みの DefinitionFile を返します。

use crate::core::config::DefinitionFile;
use crate::core::error::IoError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 定義ファイルパーサーサービス
#[derive(Debug, Clone, Default)]
pub struct DefinitionParserService {}

impl DefinitionParserService {
    /// 新しいDefinitionParserServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// YAMLファイルを解析して定義を返す
    ///
    /// # Errors
    ///
    /// - ファイルが存在しない場合
    /// - ファイルの読み込みに失敗した場合
    /// - YAMLの解析、または定義の検証に失敗した場合
    pub fn parse_definition_file(&self, file_path: &Path) -> Result<DefinitionFile> {
        if !file_path.exists() {
            return Err(IoError::FileNotFound {
                path: file_path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(file_path).map_err(|e| IoError::FileRead {
            path: file_path.display().to_string(),
            cause: e.to_string(),
        })?;

        let definition = self
            .parse_definition_str(&content)
            .with_context(|| format!("Failed to load definition file: {:?}", file_path))?;

        debug!(
            path = %file_path.display(),
            tables = definition.tables.len(),
            "Loaded definition file"
        );

        Ok(definition)
    }

    /// YAML文字列を解析して定義を返す
    pub fn parse_definition_str(&self, yaml: &str) -> Result<DefinitionFile> {
        let definition: DefinitionFile = yaml.parse()?;
        definition.validate()?;
        Ok(definition)
    }
}
