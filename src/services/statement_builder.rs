// 文生成サービス
//
// 方言定義のテンプレートにテーブル名・フィールド定義などを埋め込み、
// DDL/DML文の文字列を生成します。
// すべての操作は入力と静的な方言定義のみに依存する純粋な関数です。

use crate::adapters::sql_generator::{
    self, render_template, DialectDefinition, StatementKind, FORMAT_TOKEN,
};
use crate::core::config::Dialect;
use crate::core::error::DialectError;
use crate::core::schema::{FieldSpec, TableSpec};
use crate::core::value::{NativeKind, Value};
use crate::services::value_coercion;
use tracing::{debug, warn};

/// 既定の文の終端記号
pub const DEFAULT_TERMINATOR: &str = ";";

/// 既定のインデックス名プレフィックス
pub const DEFAULT_INDEX_PREFIX: &str = "idx_";

/// 文生成サービス
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    definition: &'static DialectDefinition,
    terminator: String,
}

impl StatementBuilder {
    /// 新しいStatementBuilderを作成
    ///
    /// 動作未検証の方言では警告を出力します。
    pub fn new(dialect: Dialect) -> Self {
        let definition = sql_generator::definition(dialect);
        if !definition.tested {
            warn!(dialect = %dialect, "{} dialect has not yet been tested", dialect);
        }

        Self {
            definition,
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }

    /// 方言名からStatementBuilderを作成
    ///
    /// # Errors
    ///
    /// サポートされていない方言名の場合は `UnsupportedDialect`
    pub fn from_name(name: &str) -> Result<Self, DialectError> {
        let dialect: Dialect = name.parse()?;
        Ok(Self::new(dialect))
    }

    /// 終端記号を設定
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// 方言を取得
    pub fn dialect(&self) -> Dialect {
        self.definition.dialect
    }

    /// 方言定義を取得
    pub fn definition(&self) -> &'static DialectDefinition {
        self.definition
    }

    /// 終端記号を取得
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// 抽象型をSQL型文字列に解決
    ///
    /// 型テンプレートが `format` トークンを含む場合は `format` を埋め込みます。
    /// `format` が空の場合は方言のフックが返す既定値を使用します。
    ///
    /// # Errors
    ///
    /// 方言の型表にない抽象型は `UnknownFieldType`
    pub fn resolve_sql_type(&self, abstract_type: &str, format: &str) -> Result<String, DialectError> {
        let field_type = self.lookup(abstract_type)?;

        let format = if format.is_empty() {
            (self.definition.default_format)(abstract_type).unwrap_or(format)
        } else {
            format
        };

        if field_type.sql_type.contains(FORMAT_TOKEN) {
            Ok(field_type.sql_type.replace(FORMAT_TOKEN, format))
        } else {
            Ok(field_type.sql_type.to_string())
        }
    }

    /// 抽象型のネイティブ値の種類を取得
    pub fn native_kind(&self, abstract_type: &str) -> Result<NativeKind, DialectError> {
        self.lookup(abstract_type).map(|field_type| field_type.native_kind)
    }

    /// 抽象型に対応するネイティブ表現へ値を変換
    pub fn coerce_value(&self, abstract_type: &str, raw: &Value) -> Result<Value, DialectError> {
        let kind = self.native_kind(abstract_type)?;
        value_coercion::retype_as(raw, kind)
    }

    /// フィールド定義を `'<name>' <type> <modifier>` 形式に変換
    pub fn render_field(&self, field: &FieldSpec) -> Result<String, DialectError> {
        let sql_type = match field.abstract_type.as_deref() {
            Some(abstract_type) if !abstract_type.is_empty() => {
                self.resolve_sql_type(abstract_type, field.format.as_deref().unwrap_or(""))?
            }
            _ => String::new(),
        };

        let modifier = if field.primary_key {
            self.definition.primary_key
        } else {
            ""
        };

        Ok(format!("'{}' {} {}", field.name, sql_type, modifier)
            .trim()
            .to_string())
    }

    /// CREATE DATABASE文を生成
    ///
    /// # Errors
    ///
    /// 方言にデータベース作成テンプレートがない場合は `UnsupportedOperation`
    pub fn build_create_database(&self, database_name: &str) -> Result<String, DialectError> {
        self.build(
            StatementKind::CreateDb,
            &[("database_name", database_name)],
        )
    }

    /// CREATE TABLE文を生成
    ///
    /// フィールドは与えられた順に `", "` で連結されます。
    /// フィールドが空の場合は `InvalidValue`
    pub fn build_create_table(
        &self,
        table_name: &str,
        fields: &[FieldSpec],
    ) -> Result<String, DialectError> {
        if fields.is_empty() {
            return Err(DialectError::invalid_value(
                table_name,
                "field_defs",
                "a table needs at least one field",
            ));
        }

        let field_defs = fields
            .iter()
            .map(|field| self.render_field(field))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");

        self.build(
            StatementKind::CreateTable,
            &[("table_name", table_name), ("field_defs", &field_defs)],
        )
    }

    /// インデックス名と同名のフィールドに対するCREATE INDEX文を生成
    pub fn build_create_index(
        &self,
        index_name: &str,
        table_name: &str,
    ) -> Result<String, DialectError> {
        self.build_create_index_with(index_name, table_name, &[index_name], DEFAULT_INDEX_PREFIX)
    }

    /// 対象フィールドとプレフィックスを指定してCREATE INDEX文を生成
    ///
    /// `field_list` が空の場合はインデックス名と同名のフィールドを対象とします。
    pub fn build_create_index_with<S: AsRef<str>>(
        &self,
        index_name: &str,
        table_name: &str,
        field_list: &[S],
        index_prefix: &str,
    ) -> Result<String, DialectError> {
        let field_list = if field_list.is_empty() {
            index_name.to_string()
        } else {
            join_quoted(field_list.iter().map(|s| s.as_ref()))
        };

        self.build(
            StatementKind::CreateIndex,
            &[
                ("index_prefix", index_prefix),
                ("index_name", index_name),
                ("table_name", table_name),
                ("field_list", &field_list),
            ],
        )
    }

    /// DROP TABLE文を生成
    pub fn build_drop_table(&self, table_name: &str) -> Result<String, DialectError> {
        self.build(StatementKind::DropTable, &[("table_name", table_name)])
    }

    /// INSERT文を生成
    ///
    /// # Errors
    ///
    /// フィールドが空の場合、フィールド数と値の数が一致しない場合、
    /// またはリテラルに変換できない値がある場合は `InvalidValue`
    pub fn build_insert<S: AsRef<str>>(
        &self,
        table_name: &str,
        field_names: &[S],
        values: &[Value],
    ) -> Result<String, DialectError> {
        if field_names.is_empty() {
            return Err(DialectError::invalid_value(
                table_name,
                "field_list",
                "an insert needs at least one field",
            ));
        }
        if field_names.len() != values.len() {
            return Err(DialectError::invalid_value(
                format!("{} value(s)", values.len()),
                "value_list",
                format!("expected {} value(s) to match the field list", field_names.len()),
            ));
        }

        let field_list = join_quoted(field_names.iter().map(|s| s.as_ref()));
        let value_list = values
            .iter()
            .map(value_coercion::render_literal)
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");

        self.build(
            StatementKind::InsertTable,
            &[
                ("table_name", table_name),
                ("field_list", &field_list),
                ("value_list", &value_list),
            ],
        )
    }

    /// DROP DATABASE文を生成（未実装）
    pub fn build_drop_database(&self, _database_name: &str) -> Result<String, DialectError> {
        Err(self.not_implemented("drop_db"))
    }

    /// データベースを作成（未実装）
    pub fn build_make_database(&self, _database_name: &str) -> Result<String, DialectError> {
        Err(self.not_implemented("make_db"))
    }

    /// テーブル定義からCREATE TABLE文と各CREATE INDEX文を生成
    pub fn build_table_script(&self, table: &TableSpec) -> Result<Vec<String>, DialectError> {
        let mut statements = vec![self.build_create_table(&table.name, &table.fields)?];

        for index in &table.indexes {
            let prefix = index.prefix.as_deref().unwrap_or(DEFAULT_INDEX_PREFIX);
            statements.push(self.build_create_index_with(
                &index.name,
                &table.name,
                index.fields.as_slice(),
                prefix,
            )?);
        }

        Ok(statements)
    }

    fn lookup(
        &self,
        abstract_type: &str,
    ) -> Result<&'static sql_generator::FieldType, DialectError> {
        self.definition
            .field_type(abstract_type)
            .ok_or_else(|| DialectError::UnknownFieldType {
                field_type: abstract_type.to_string(),
                dialect: self.dialect().to_string(),
            })
    }

    fn build(&self, kind: StatementKind, params: &[(&str, &str)]) -> Result<String, DialectError> {
        let template =
            self.definition
                .template(kind)
                .ok_or_else(|| DialectError::UnsupportedOperation {
                    operation: kind.key().to_string(),
                    dialect: self.dialect().to_string(),
                })?;

        let mut all_params = params.to_vec();
        all_params.push(("end", self.terminator.as_str()));

        let statement = render_template(template, &all_params)?.trim().to_string();
        debug!(dialect = %self.dialect(), kind = %kind, statement = %statement, "Generated statement");
        Ok(statement)
    }

    fn not_implemented(&self, operation: &str) -> DialectError {
        DialectError::NotImplemented {
            operation: operation.to_string(),
            dialect: self.dialect().to_string(),
        }
    }
}

fn join_quoted<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join("', '")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sql_generator::template_placeholders;

    #[test]
    fn test_every_abstract_type_resolves() {
        for dialect in Dialect::ALL {
            let builder = StatementBuilder::new(dialect);
            for abstract_type in builder.definition().abstract_types() {
                let sql_type = builder.resolve_sql_type(abstract_type, "10").unwrap();
                assert!(!sql_type.is_empty(), "{} {}", dialect, abstract_type);
            }
        }
    }

    #[test]
    fn test_unknown_field_type() {
        let builder = StatementBuilder::new(Dialect::SQLite);
        let err = builder.resolve_sql_type("uuid", "").unwrap_err();
        assert_eq!(
            err,
            DialectError::UnknownFieldType {
                field_type: "uuid".to_string(),
                dialect: "SQLite3".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_format_substitution() {
        let builder = StatementBuilder::new(Dialect::MySQL);
        assert_eq!(builder.resolve_sql_type("varchar", "255").unwrap(), "VARCHAR(255)");
        assert_eq!(builder.resolve_sql_type("decimal", "12,2").unwrap(), "DECIMAL(12,2)");
        assert_eq!(builder.resolve_sql_type("varchar", "").unwrap(), "VARCHAR()");
    }

    #[test]
    fn test_mysql_money_default_format() {
        let builder = StatementBuilder::new(Dialect::MySQL);
        assert_eq!(
            builder.resolve_sql_type("money", "").unwrap(),
            builder.resolve_sql_type("money", "12.2").unwrap()
        );
    }

    #[test]
    fn test_render_field() {
        let builder = StatementBuilder::new(Dialect::SQLite);
        assert_eq!(
            builder.render_field(&FieldSpec::new("a", "integer")).unwrap(),
            "'a' INTEGER"
        );
        assert_eq!(
            builder
                .render_field(&FieldSpec::new("id", "integer").primary_key())
                .unwrap(),
            "'id' INTEGER PRIMARY KEY"
        );
        assert_eq!(builder.render_field(&FieldSpec::untyped("note")).unwrap(), "'note'");
    }

    #[test]
    fn test_render_field_untyped_primary_key_keeps_double_space() {
        // 空の型セグメントは詰められない
        let builder = StatementBuilder::new(Dialect::SQLite);
        let field = FieldSpec::untyped("id").primary_key();
        assert_eq!(builder.render_field(&field).unwrap(), "'id'  PRIMARY KEY");
    }

    #[test]
    fn test_coerce_value_uses_native_kind() {
        let builder = StatementBuilder::new(Dialect::PostgreSQL);
        assert_eq!(
            builder.coerce_value("boolean", &"yes".into()).unwrap(),
            Value::Integer(1)
        );
        assert_eq!(
            builder.coerce_value("integer", &"12".into()).unwrap(),
            Value::Integer(12)
        );
        assert_eq!(builder.coerce_value("null", &"x".into()).unwrap(), Value::Null);
        assert!(builder.coerce_value("uuid", &"x".into()).unwrap_err().is_unknown_field_type());
    }

    /// 空のフィールド一覧では不完全な文を生成しない
    #[test]
    fn test_empty_field_lists_rejected() {
        let builder = StatementBuilder::new(Dialect::SQLite);
        let no_names: [&str; 0] = [];

        let err = builder.build_insert("t", &no_names, &[]).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(
            err.to_string(),
            "Invalid value 't' for field_list: an insert needs at least one field"
        );

        let err = builder.build_create_table("t", &[]).unwrap_err();
        assert!(err.is_invalid_value());
        assert!(builder
            .build_table_script(&TableSpec::new("t"))
            .unwrap_err()
            .is_invalid_value());
    }

    #[test]
    fn test_custom_terminator() {
        let builder = StatementBuilder::new(Dialect::SQLite).with_terminator("");
        assert_eq!(builder.terminator(), "");
        assert_eq!(builder.build_drop_table("t").unwrap(), "DROP TABLE IF EXISTS 't'");
    }

    #[test]
    fn test_every_template_is_fully_resolved() {
        let known = [
            "database_name",
            "table_name",
            "field_defs",
            "index_prefix",
            "index_name",
            "field_list",
            "value_list",
            "end",
        ];
        for dialect in Dialect::ALL {
            let definition = sql_generator::definition(dialect);
            for kind in [
                StatementKind::CreateDb,
                StatementKind::CreateTable,
                StatementKind::CreateIndex,
                StatementKind::InsertTable,
                StatementKind::DropTable,
            ] {
                if let Some(template) = definition.template(kind) {
                    for placeholder in template_placeholders(template) {
                        assert!(known.contains(&placeholder), "{} in {}", placeholder, kind);
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            StatementBuilder::from_name("PostgreSQL").unwrap().dialect(),
            Dialect::PostgreSQL
        );
        assert!(StatementBuilder::from_name("DB2")
            .unwrap_err()
            .is_unsupported_dialect());
    }
}
