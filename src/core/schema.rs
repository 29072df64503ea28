// テーブル定義ドメインモデル
//
// 文の生成に使用するテーブル・フィールド・インデックスの記述を表現します。
// FieldSpec, TableSpec, IndexSpec を提供します。

use serde::{Deserialize, Serialize};

/// テーブル定義
///
/// フィールドの挿入順序を保持します。この順序がDDL内のカラム順序になります。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSpec {
    /// テーブル名
    pub name: String,

    /// フィールド定義のリスト（宣言順）
    pub fields: Vec<FieldSpec>,

    /// インデックス定義のリスト
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<IndexSpec>,
}

impl TableSpec {
    /// 新しいテーブルを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// (フィールド名, 抽象型名) の組からテーブルを作成
    pub fn from_pairs<N, T>(name: impl Into<String>, pairs: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        let mut table = Self::new(name);
        for (field_name, field_type) in pairs {
            table.add_field(FieldSpec::new(field_name, field_type));
        }
        table
    }

    /// フィールドを追加
    pub fn add_field(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// インデックスを追加
    pub fn add_index(&mut self, index: IndexSpec) {
        self.indexes.push(index);
    }

    /// 指定されたフィールドを取得
    pub fn get_field(&self, field_name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == field_name)
    }

    /// フィールド名のリストを取得
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// フィールド定義
///
/// 生成するカラム1つを記述します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// フィールド名
    pub name: String,

    /// 抽象型名（`integer`, `money` など）
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub abstract_type: Option<String>,

    /// 型テンプレートの `format` に埋め込む値
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// プライマリキーかどうか
    #[serde(default)]
    pub primary_key: bool,
}

impl FieldSpec {
    /// 抽象型を指定してフィールドを作成
    pub fn new(name: impl Into<String>, abstract_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abstract_type: Some(abstract_type.into()),
            format: None,
            primary_key: false,
        }
    }

    /// 型を持たないフィールドを作成
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abstract_type: None,
            format: None,
            primary_key: false,
        }
    }

    /// フォーマットを設定
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// プライマリキーとして設定
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

/// インデックス定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSpec {
    /// インデックス名（プレフィックスを除く）
    pub name: String,

    /// 対象フィールド。空の場合はインデックス名と同名のフィールド1つ
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,

    /// インデックス名のプレフィックス。未指定の場合は `idx_`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl IndexSpec {
    /// インデックス名と同名のフィールドに対するインデックスを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            prefix: None,
        }
    }

    /// 対象フィールドを設定
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// プレフィックスを設定
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_preserves_order() {
        let table = TableSpec::from_pairs(
            "test_table",
            [
                ("person_id", "serial"),
                ("employee_type", "integer"),
                ("money", "money"),
                ("food", "text"),
            ],
        );

        assert_eq!(
            table.field_names(),
            vec!["person_id", "employee_type", "money", "food"]
        );
        assert!(table.indexes.is_empty());
    }

    #[test]
    fn test_get_field() {
        let mut table = TableSpec::new("users");
        table.add_field(FieldSpec::new("id", "serial").primary_key());
        table.add_field(FieldSpec::new("name", "varchar").with_format("100"));

        let name = table.get_field("name").unwrap();
        assert_eq!(name.abstract_type.as_deref(), Some("varchar"));
        assert_eq!(name.format.as_deref(), Some("100"));
        assert!(!name.primary_key);
        assert!(table.get_field("id").unwrap().primary_key);
        assert!(table.get_field("missing").is_none());
    }

    #[test]
    fn test_untyped_field() {
        let field = FieldSpec::untyped("note");
        assert!(field.abstract_type.is_none());
        assert!(field.format.is_none());
    }

    #[test]
    fn test_index_builder() {
        let index = IndexSpec::new("etype_pid")
            .with_fields(["employee_type", "person_id"])
            .with_prefix("index_");

        assert_eq!(index.fields, vec!["employee_type", "person_id"]);
        assert_eq!(index.prefix.as_deref(), Some("index_"));
    }
}
