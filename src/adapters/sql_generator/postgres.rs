// PostgreSQL用方言定義

use crate::adapters::sql_generator::{
    no_default_format, DialectDefinition, FieldType, StatementTemplates, CREATE_INDEX,
    CREATE_TABLE, DROP_TABLE, INSERT_TABLE,
};
use crate::core::config::Dialect;
use crate::core::value::NativeKind;

const FIELD_TYPES: &[(&str, FieldType)] = &[
    // プライマリキー型
    ("serial", FieldType::new("SERIAL", NativeKind::Integer)),
    // 共通型
    ("null", FieldType::new("NULL", NativeKind::None)),
    ("integer", FieldType::new("INTEGER", NativeKind::Integer)),
    ("float", FieldType::new("FLOAT", NativeKind::Float)),
    ("text", FieldType::new("TEXT", NativeKind::String)),
    ("blob", FieldType::new("BYTEA", NativeKind::Blob)),
    // 日時・論理型
    ("boolean", FieldType::new("BOOLEAN", NativeKind::Boolean)),
    ("date", FieldType::new("DATE", NativeKind::String)),
    ("time", FieldType::new("TIME", NativeKind::String)),
    ("datetime", FieldType::new("TIMESTAMP", NativeKind::String)),
    ("timestamp", FieldType::new("TIMESTAMP", NativeKind::String)),
    // その他
    ("varchar", FieldType::new("VARCHAR(format)", NativeKind::String)),
    ("decimal", FieldType::new("DECIMAL(format)", NativeKind::Float)),
    ("money", FieldType::new("MONEY", NativeKind::Float)),
    ("json", FieldType::new("JSON", NativeKind::String)),
];

/// PostgreSQL用方言定義
///
/// データベース作成文は持ちません。
pub static DEFINITION: DialectDefinition = DialectDefinition {
    dialect: Dialect::PostgreSQL,
    field_types: FIELD_TYPES,
    default_type: FieldType::new("TEXT", NativeKind::String),
    primary_key: "PRIMARY KEY",
    templates: StatementTemplates {
        create_db: None,
        create_table: Some(CREATE_TABLE),
        create_index: Some(CREATE_INDEX),
        insert_table: Some(INSERT_TABLE),
        drop_table: Some(DROP_TABLE),
    },
    default_format: no_default_format,
    tested: false,
};
