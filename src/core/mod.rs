// Core Domain
// 方言識別子、テーブル定義、値モデル、エラー型

pub mod config;
pub mod error;
pub mod schema;
pub mod value;
