// generateコマンドハンドラー
//
// テーブル定義ファイルから文を生成します。
// - 定義ファイルの読み込みと検証
// - 方言の決定（--dialect が定義ファイルより優先）
// - CREATE DATABASE / CREATE TABLE / CREATE INDEX 文、または DROP TABLE 文の生成

use crate::cli::commands::CommandOutput;
use crate::core::config::Dialect;
use crate::services::definition_parser::DefinitionParserService;
use crate::services::statement_builder::StatementBuilder;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// generateコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// 方言名
    pub dialect: String,
    /// 生成された文
    pub statements: Vec<String>,
    /// 警告メッセージ
    pub warnings: Vec<String>,
}

impl CommandOutput for GenerateOutput {
    fn to_text(&self) -> String {
        self.statements.join("\n")
    }
}

/// generateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// テーブル定義ファイルのパス
    pub file: PathBuf,
    /// 方言（指定されない場合は定義ファイルから取得）
    pub dialect: Option<Dialect>,
    /// CREATE 文の代わりに DROP TABLE 文を生成
    pub drop: bool,
}

/// generateコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct GenerateCommandHandler {}

impl GenerateCommandHandler {
    /// 新しいGenerateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// generateコマンドを実行
    ///
    /// # Returns
    ///
    /// 成功時は生成された文の一覧、失敗時はエラーメッセージ
    pub fn execute(&self, command: &GenerateCommand) -> Result<GenerateOutput> {
        let parser = DefinitionParserService::new();
        let definition = parser.parse_definition_file(&command.file)?;

        let dialect = definition.resolve_dialect(command.dialect)?;
        let builder = StatementBuilder::new(dialect).with_terminator(definition.terminator.as_str());

        let mut statements = Vec::new();
        let mut warnings = Vec::new();

        if command.drop {
            for table in &definition.tables {
                statements.push(builder.build_drop_table(&table.name)?);
            }
        } else {
            if let Some(database) = definition.database.as_deref() {
                match builder.build_create_database(database) {
                    Ok(statement) => statements.push(statement),
                    Err(e) if e.is_unsupported_operation() => {
                        let message = format!("Skipping database '{}': {}", database, e);
                        warn!("{}", message);
                        warnings.push(message);
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            for table in &definition.tables {
                let script = builder
                    .build_table_script(table)
                    .with_context(|| format!("Failed to generate table '{}'", table.name))?;
                statements.extend(script);
            }
        }

        Ok(GenerateOutput {
            dialect: dialect.to_string(),
            statements,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_definition(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tables.yaml");
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    const DEFINITION: &str = r#"
dialect: MySQL
database: testbase
tables:
  - name: test_table
    fields:
      - { name: person_id, type: serial }
      - { name: employee_type, type: integer }
    indexes:
      - { name: employee_type }
"#;

    #[test]
    fn test_generate_create_statements() {
        let (_temp_dir, path) = write_definition(DEFINITION);
        let handler = GenerateCommandHandler::new();
        let output = handler
            .execute(&GenerateCommand {
                file: path,
                dialect: None,
                drop: false,
            })
            .unwrap();

        assert_eq!(output.dialect, "MySQL");
        assert_eq!(
            output.statements,
            vec![
                "CREATE DATABASE IF NOT EXISTS 'testbase'; USE 'testbase';",
                "CREATE TABLE IF NOT EXISTS 'test_table' ('person_id' SERIAL, 'employee_type' INTEGER);",
                "CREATE INDEX IF NOT EXISTS 'idx_employee_type' ON 'test_table' ('employee_type');",
            ]
        );
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_generate_skips_unsupported_database() {
        let (_temp_dir, path) = write_definition(DEFINITION);
        let handler = GenerateCommandHandler::new();
        let output = handler
            .execute(&GenerateCommand {
                file: path,
                dialect: Some(Dialect::SQLite),
                drop: false,
            })
            .unwrap();

        assert_eq!(output.statements.len(), 2);
        assert_eq!(output.warnings.len(), 1);
        assert!(output.warnings[0].contains("create_db is not supported by SQLite3"));
    }

    #[test]
    fn test_generate_drop_statements() {
        let (_temp_dir, path) = write_definition(DEFINITION);
        let handler = GenerateCommandHandler::new();
        let output = handler
            .execute(&GenerateCommand {
                file: path,
                dialect: Some(Dialect::PostgreSQL),
                drop: true,
            })
            .unwrap();

        assert_eq!(output.to_text(), "DROP TABLE IF EXISTS 'test_table';");
    }

    #[test]
    fn test_generate_unknown_field_type() {
        let (_temp_dir, path) = write_definition(
            "dialect: SQLite3\ntables:\n  - name: t\n    fields:\n      - { name: id, type: uuid }\n",
        );
        let handler = GenerateCommandHandler::new();
        let err = handler
            .execute(&GenerateCommand {
                file: path,
                dialect: None,
                drop: false,
            })
            .unwrap_err();

        assert!(format!("{:#}", err).contains("No translation for 'uuid' available"));
    }
}
