// 設定ファイル管理
//
// テーブル定義ファイル（YAML形式）のモデルと、データベース方言の識別子を提供します。

use crate::core::error::DialectError;
use crate::core::schema::TableSpec;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// データベース方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    #[serde(rename = "SQLite3")]
    SQLite,
    #[serde(rename = "MySQL")]
    MySQL,
    #[serde(rename = "PostgreSQL")]
    PostgreSQL,
}

impl Dialect {
    /// サポートされているすべての方言
    pub const ALL: [Dialect; 3] = [Dialect::SQLite, Dialect::MySQL, Dialect::PostgreSQL];

    /// 方言名を取得
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::SQLite => "SQLite3",
            Dialect::MySQL => "MySQL",
            Dialect::PostgreSQL => "PostgreSQL",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 方言名の完全一致で変換
impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SQLite3" => Ok(Dialect::SQLite),
            "MySQL" => Ok(Dialect::MySQL),
            "PostgreSQL" => Ok(Dialect::PostgreSQL),
            other => Err(DialectError::UnsupportedDialect {
                name: other.to_string(),
            }),
        }
    }
}

/// テーブル定義ファイル
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionFile {
    /// データベース方言（CLIの --dialect で上書き可能）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,

    /// 作成するデータベース名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// 文の終端記号
    #[serde(default = "default_terminator")]
    pub terminator: String,

    /// テーブル定義のリスト
    pub tables: Vec<TableSpec>,
}

fn default_terminator() -> String {
    ";".to_string()
}

impl DefinitionFile {
    /// 方言を決定する
    ///
    /// 引数で指定された方言を優先し、なければファイル内の方言を使用します。
    pub fn resolve_dialect(&self, override_dialect: Option<Dialect>) -> Result<Dialect> {
        override_dialect.or(self.dialect).ok_or_else(|| {
            anyhow!("No dialect specified. Set `dialect` in the definition file or pass --dialect.")
        })
    }

    /// 定義の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.tables.is_empty() {
            return Err(anyhow!("At least one table definition is required"));
        }

        let mut seen = HashSet::new();
        for table in &self.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(anyhow!("Table '{}' is defined more than once", table.name));
            }
            validate_table(table)
                .with_context(|| format!("Invalid definition for table '{}'", table.name))?;
        }

        Ok(())
    }
}

fn validate_table(table: &TableSpec) -> Result<()> {
    if table.name.is_empty() {
        return Err(anyhow!("Table name is not specified"));
    }
    if table.fields.is_empty() {
        return Err(anyhow!("At least one field is required"));
    }

    let mut seen = HashSet::new();
    for field in &table.fields {
        if !seen.insert(field.name.as_str()) {
            return Err(anyhow!("Field '{}' is defined more than once", field.name));
        }
    }

    Ok(())
}

/// std::str::FromStrトレイトの実装
impl FromStr for DefinitionFile {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse definition file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::FieldSpec;

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::SQLite.to_string(), "SQLite3");
        assert_eq!(Dialect::MySQL.to_string(), "MySQL");
        assert_eq!(Dialect::PostgreSQL.to_string(), "PostgreSQL");
    }

    #[test]
    fn test_dialect_from_str_exact_match() {
        assert_eq!("SQLite3".parse::<Dialect>(), Ok(Dialect::SQLite));
        assert_eq!("MySQL".parse::<Dialect>(), Ok(Dialect::MySQL));
        assert_eq!("PostgreSQL".parse::<Dialect>(), Ok(Dialect::PostgreSQL));

        // 大文字小文字や別名は受け付けない
        assert!("sqlite".parse::<Dialect>().unwrap_err().is_unsupported_dialect());
        assert!("postgres".parse::<Dialect>().is_err());
        assert!("".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_resolve_dialect_prefers_override() {
        let definition = DefinitionFile {
            dialect: Some(Dialect::MySQL),
            database: None,
            terminator: default_terminator(),
            tables: vec![],
        };

        assert_eq!(definition.resolve_dialect(None).unwrap(), Dialect::MySQL);
        assert_eq!(
            definition.resolve_dialect(Some(Dialect::SQLite)).unwrap(),
            Dialect::SQLite
        );
    }

    #[test]
    fn test_resolve_dialect_missing() {
        let definition = DefinitionFile {
            dialect: None,
            database: None,
            terminator: default_terminator(),
            tables: vec![],
        };

        assert!(definition.resolve_dialect(None).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicates() {
        let mut definition = DefinitionFile {
            dialect: None,
            database: None,
            terminator: default_terminator(),
            tables: vec![],
        };
        assert!(definition.validate().is_err());

        let mut table = TableSpec::new("users");
        table.add_field(FieldSpec::new("id", "serial"));
        table.add_field(FieldSpec::new("id", "integer"));
        definition.tables.push(table);

        let err = definition.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("Field 'id' is defined more than once"));
    }
}
