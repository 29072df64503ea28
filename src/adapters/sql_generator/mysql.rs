// MySQL用方言定義
//
// VARCHAR / DECIMAL はフォーマット（長さ・精度）を型テンプレートに埋め込みます。
// money 型はフォーマット未指定時に "12.2" を既定値として使用します。

use crate::adapters::sql_generator::{
    DialectDefinition, FieldType, StatementTemplates, CREATE_INDEX, CREATE_TABLE, DROP_TABLE,
    INSERT_TABLE,
};
use crate::core::config::Dialect;
use crate::core::value::NativeKind;

/// money 型の既定フォーマット
pub const DEFAULT_MONEY_FORMAT: &str = "12.2";

const FIELD_TYPES: &[(&str, FieldType)] = &[
    // プライマリキー型
    ("serial", FieldType::new("SERIAL", NativeKind::Integer)),
    // 共通型
    ("null", FieldType::new("NULL", NativeKind::None)),
    ("integer", FieldType::new("INTEGER", NativeKind::Integer)),
    ("float", FieldType::new("REAL", NativeKind::Float)),
    ("text", FieldType::new("TEXT", NativeKind::String)),
    ("blob", FieldType::new("BLOB", NativeKind::Blob)),
    // 日時・論理型
    ("boolean", FieldType::new("BOOLEAN", NativeKind::Boolean)),
    ("date", FieldType::new("DATE", NativeKind::String)),
    ("time", FieldType::new("TIME", NativeKind::String)),
    ("datetime", FieldType::new("DATETIME", NativeKind::String)),
    ("timestamp", FieldType::new("TIMESTAMP", NativeKind::String)),
    // その他
    ("varchar", FieldType::new("VARCHAR(format)", NativeKind::String)),
    ("decimal", FieldType::new("DECIMAL(format)", NativeKind::Float)),
    ("money", FieldType::new("DECIMAL[20,2]", NativeKind::Float)),
    ("json", FieldType::new("JSON", NativeKind::String)),
];

/// フォーマット未指定時の既定値
fn default_format(abstract_type: &str) -> Option<&'static str> {
    match abstract_type {
        "money" => Some(DEFAULT_MONEY_FORMAT),
        _ => None,
    }
}

/// MySQL用方言定義
pub static DEFINITION: DialectDefinition = DialectDefinition {
    dialect: Dialect::MySQL,
    field_types: FIELD_TYPES,
    default_type: FieldType::new("VARCHAR(255)", NativeKind::String),
    primary_key: "PRIMARY KEY",
    templates: StatementTemplates {
        create_db: Some(
            "CREATE DATABASE IF NOT EXISTS '{database_name}'{end} USE '{database_name}'{end}",
        ),
        create_table: Some(CREATE_TABLE),
        create_index: Some(CREATE_INDEX),
        insert_table: Some(INSERT_TABLE),
        drop_table: Some(DROP_TABLE),
    },
    default_format,
    tested: false,
};
