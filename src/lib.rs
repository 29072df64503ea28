// sqldialectsライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメイン（方言識別子、テーブル定義、値モデル、エラー型）
// - adapters: 方言ごとの型対応表と文テンプレート
// - services: 文の生成、値の変換、定義ファイルの読み込み

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;

pub use crate::adapters::sql_generator::{get_dialect, DialectDefinition};
pub use crate::core::config::Dialect;
pub use crate::core::error::DialectError;
pub use crate::core::schema::{FieldSpec, IndexSpec, TableSpec};
pub use crate::core::value::{NativeKind, Value, ValueClass};
pub use crate::services::statement_builder::StatementBuilder;
pub use crate::services::value_coercion::{classify, retype};
