// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod generate;
pub mod types;

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;

/// コマンド出力
///
/// テキスト表示とJSON出力の両方に対応する出力構造体が実装します。
pub trait CommandOutput: Serialize {
    /// テキスト形式に変換
    fn to_text(&self) -> String;
}

/// 出力フォーマットに従ってコマンド出力を文字列化
pub fn render_output<T: CommandOutput>(output: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).with_context(|| "Failed to serialize output")
        }
    }
}
