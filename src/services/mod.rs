// Services Layer
// 文の生成、値の変換、定義ファイルの読み込みを行うサービス層

pub mod definition_parser;
pub mod statement_builder;
pub mod value_coercion;
