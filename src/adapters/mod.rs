// Adapters
// 方言ごとの型対応表と文テンプレート

pub mod sql_generator;
