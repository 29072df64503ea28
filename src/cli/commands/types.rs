// typesコマンドハンドラー
//
// 方言の抽象型一覧と、解決後のSQL型・ネイティブ値の種類を表示します。

use crate::cli::commands::CommandOutput;
use crate::core::config::Dialect;
use crate::services::statement_builder::StatementBuilder;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

/// typesコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct TypesOutput {
    /// 方言名
    pub dialect: String,
    /// 既定の型
    pub default_type: String,
    /// 抽象型ごとの解決結果
    pub types: Vec<TypeEntry>,
}

/// 抽象型1つの解決結果
#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub abstract_type: String,
    pub sql_type: String,
    pub native_kind: String,
}

impl CommandOutput for TypesOutput {
    fn to_text(&self) -> String {
        let width = self
            .types
            .iter()
            .map(|entry| entry.abstract_type.len())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        output.push_str(&format!("{}\n", format!("{} field types", self.dialect).bold()));
        output.push_str(&format!("{}\n", "-".repeat(20)));

        for entry in &self.types {
            output.push_str(&format!(
                "{:width$}  {}  ({})\n",
                entry.abstract_type,
                entry.sql_type.cyan(),
                entry.native_kind,
                width = width
            ));
        }

        output.push_str(&format!("\nDefault type: {}", self.default_type));
        output
    }
}

/// typesコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct TypesCommand {
    /// 対象の方言
    pub dialect: Dialect,
    /// 型テンプレートに埋め込むフォーマット
    pub format: String,
}

/// typesコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct TypesCommandHandler {}

impl TypesCommandHandler {
    /// 新しいTypesCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// typesコマンドを実行
    pub fn execute(&self, command: &TypesCommand) -> Result<TypesOutput> {
        let builder = StatementBuilder::new(command.dialect);
        let definition = builder.definition();

        let types = definition
            .abstract_types()
            .map(|abstract_type| -> Result<TypeEntry> {
                let sql_type = builder
                    .resolve_sql_type(abstract_type, &command.format)
                    .with_context(|| format!("Failed to resolve '{}'", abstract_type))?;
                let native_kind = builder.native_kind(abstract_type)?;
                Ok(TypeEntry {
                    abstract_type: abstract_type.to_string(),
                    sql_type,
                    native_kind: native_kind.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypesOutput {
            dialect: command.dialect.to_string(),
            default_type: definition.default_type.sql_type.to_string(),
            types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_lists_every_abstract_type() {
        let handler = TypesCommandHandler::new();
        let output = handler
            .execute(&TypesCommand {
                dialect: Dialect::PostgreSQL,
                format: "12,2".to_string(),
            })
            .unwrap();

        assert_eq!(output.dialect, "PostgreSQL");
        assert_eq!(output.default_type, "TEXT");
        assert_eq!(output.types.len(), 15);

        let decimal = output
            .types
            .iter()
            .find(|entry| entry.abstract_type == "decimal")
            .unwrap();
        assert_eq!(decimal.sql_type, "DECIMAL(12,2)");
        assert_eq!(decimal.native_kind, "float");
    }

    #[test]
    fn test_types_text_output() {
        let handler = TypesCommandHandler::new();
        let output = handler
            .execute(&TypesCommand {
                dialect: Dialect::SQLite,
                format: String::new(),
            })
            .unwrap();

        let text = output.to_text();
        assert!(text.contains("SQLite3 field types"));
        assert!(text.contains("INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(text.ends_with("Default type: TEXT"));
    }
}
