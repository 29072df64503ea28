// SQLite用方言定義
//
// SQLiteは型アフィニティによる柔軟な型システムを持つため、
// 多くの抽象型をTEXTまたはINTEGERへ対応付けます。
// CREATE DATABASE に相当する文は存在しません。

use crate::adapters::sql_generator::{
    no_default_format, DialectDefinition, FieldType, StatementTemplates, CREATE_INDEX,
    CREATE_TABLE, DROP_TABLE, INSERT_TABLE,
};
use crate::core::config::Dialect;
use crate::core::value::NativeKind;

const FIELD_TYPES: &[(&str, FieldType)] = &[
    // プライマリキー型
    ("serial", FieldType::new("INTEGER PRIMARY KEY AUTOINCREMENT", NativeKind::Integer)),
    // 基本型
    ("null", FieldType::new("NULL", NativeKind::None)),
    ("integer", FieldType::new("INTEGER", NativeKind::Integer)),
    ("float", FieldType::new("FLOAT", NativeKind::Float)),
    ("text", FieldType::new("TEXT", NativeKind::String)),
    ("blob", FieldType::new("BLOB", NativeKind::Blob)),
    // BOOLEAN型がないため INTEGER (0/1) で表現
    ("boolean", FieldType::new("INTEGER", NativeKind::Boolean)),
    // 日時はISO 8601形式のTEXT
    ("date", FieldType::new("TEXT", NativeKind::String)),
    ("time", FieldType::new("TEXT", NativeKind::String)),
    ("datetime", FieldType::new("TEXT", NativeKind::String)),
    ("timestamp", FieldType::new("TEXT", NativeKind::String)),
    // その他
    ("varchar", FieldType::new("TEXT", NativeKind::String)),
    ("decimal", FieldType::new("TEXT", NativeKind::Float)), // 精度保証のためTEXTを使用
    ("money", FieldType::new("TEXT", NativeKind::Float)),
    ("json", FieldType::new("TEXT", NativeKind::String)),
];

/// SQLite用方言定義
pub static DEFINITION: DialectDefinition = DialectDefinition {
    dialect: Dialect::SQLite,
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
    tested: true,
};
