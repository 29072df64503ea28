// SQL方言定義アダプター
//
// 抽象型から各データベース方言の型文字列への対応表と、
// DDL/DML文のテンプレートを方言ごとに保持します。

pub mod mysql;
pub mod postgres;
pub mod sqlite;

use crate::core::config::Dialect;
use crate::core::error::DialectError;
use crate::core::value::NativeKind;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// 全方言共通の CREATE TABLE テンプレート
pub(crate) const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS '{table_name}' ({field_defs}){end}";

/// 全方言共通の CREATE INDEX テンプレート
pub(crate) const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS '{index_prefix}{index_name}' ON '{table_name}' ('{field_list}'){end}";

/// 全方言共通の INSERT テンプレート
pub(crate) const INSERT_TABLE: &str =
    "INSERT INTO '{table_name}' ('{field_list}') VALUES ({value_list}){end}";

/// 全方言共通の DROP TABLE テンプレート
pub(crate) const DROP_TABLE: &str = "DROP TABLE IF EXISTS '{table_name}'{end}";

/// 型テンプレート内でフォーマット値に置き換えられるトークン
pub const FORMAT_TOKEN: &str = "format";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("valid regex"));

/// 抽象型の対応先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    /// SQL型テンプレート（`format` トークンを含む場合がある）
    pub sql_type: &'static str,
    /// 値の変換先
    pub native_kind: NativeKind,
}

impl FieldType {
    pub(crate) const fn new(sql_type: &'static str, native_kind: NativeKind) -> Self {
        Self {
            sql_type,
            native_kind,
        }
    }
}

/// 文の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    CreateDb,
    CreateTable,
    CreateIndex,
    InsertTable,
    DropTable,
}

impl StatementKind {
    /// テンプレートのキー名を取得
    pub fn key(&self) -> &'static str {
        match self {
            StatementKind::CreateDb => "create_db",
            StatementKind::CreateTable => "create_table",
            StatementKind::CreateIndex => "create_index",
            StatementKind::InsertTable => "insert_table",
            StatementKind::DropTable => "drop_table",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// 方言ごとの文テンプレート
///
/// `None` のテンプレートはその方言でサポートされない操作を表します。
#[derive(Debug, Clone, Copy)]
pub struct StatementTemplates {
    pub create_db: Option<&'static str>,
    pub create_table: Option<&'static str>,
    pub create_index: Option<&'static str>,
    pub insert_table: Option<&'static str>,
    pub drop_table: Option<&'static str>,
}

/// 方言定義
///
/// 構築後に変更されることのない静的データです。
#[derive(Debug)]
pub struct DialectDefinition {
    /// 方言
    pub dialect: Dialect,
    /// 抽象型名 -> 対応先（宣言順）
    pub field_types: &'static [(&'static str, FieldType)],
    /// 既定の型
    pub default_type: FieldType,
    /// プライマリキー修飾子
    pub primary_key: &'static str,
    /// 文テンプレート
    pub templates: StatementTemplates,
    /// フォーマット未指定時の既定値を返すフック
    pub default_format: fn(&str) -> Option<&'static str>,
    /// 動作検証済みの方言かどうか
    pub tested: bool,
}

impl DialectDefinition {
    /// 抽象型の対応先を取得
    pub fn field_type(&self, abstract_type: &str) -> Option<&FieldType> {
        self.field_types
            .iter()
            .find(|(name, _)| *name == abstract_type)
            .map(|(_, field_type)| field_type)
    }

    /// 抽象型名の一覧を宣言順に取得
    pub fn abstract_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.field_types.iter().map(|(name, _)| *name)
    }

    /// 文テンプレートを取得
    pub fn template(&self, kind: StatementKind) -> Option<&'static str> {
        match kind {
            StatementKind::CreateDb => self.templates.create_db,
            StatementKind::CreateTable => self.templates.create_table,
            StatementKind::CreateIndex => self.templates.create_index,
            StatementKind::InsertTable => self.templates.insert_table,
            StatementKind::DropTable => self.templates.drop_table,
        }
    }
}

/// フォーマットの既定値を持たない方言用のフック
pub(crate) fn no_default_format(_abstract_type: &str) -> Option<&'static str> {
    None
}

/// 方言の定義を取得
pub fn definition(dialect: Dialect) -> &'static DialectDefinition {
    match dialect {
        Dialect::SQLite => &sqlite::DEFINITION,
        Dialect::MySQL => &mysql::DEFINITION,
        Dialect::PostgreSQL => &postgres::DEFINITION,
    }
}

/// 方言名から方言定義を取得
///
/// # Errors
///
/// `SQLite3`, `MySQL`, `PostgreSQL` 以外の名前は `UnsupportedDialect`
pub fn get_dialect(name: &str) -> Result<&'static DialectDefinition, DialectError> {
    let dialect: Dialect = name.parse()?;
    Ok(definition(dialect))
}

/// テンプレートのプレースホルダーを置換
///
/// 置換は1パスで行い、埋め込んだ値の中のプレースホルダーは再解釈しません。
///
/// # Errors
///
/// 値が与えられていないプレースホルダーがある場合は `UnresolvedPlaceholder`
pub fn render_template(template: &str, params: &[(&str, &str)]) -> Result<String, DialectError> {
    if let Some(missing) = template_placeholders(template)
        .into_iter()
        .find(|key| !params.iter().any(|(name, _)| name == key))
    {
        return Err(DialectError::UnresolvedPlaceholder {
            placeholder: missing.to_string(),
        });
    }

    Ok(PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            params
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned())
}

/// テンプレートに含まれるプレースホルダー名を取得
pub fn template_placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
