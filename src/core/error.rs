// エラー型定義
//
// ライブラリ全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、DialectError と IoError を定義します。

use thiserror::Error;

/// 方言エラー
///
/// 方言の選択、型の解決、文の生成、値の変換で発生するエラーを表現します。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialectError {
    /// Unsupported dialect name
    #[error("'{name}' is not an implemented dialect. Please specify one of: SQLite3, MySQL, PostgreSQL.")]
    UnsupportedDialect {
        /// 指定された方言名
        name: String,
    },

    /// Abstract type missing from the dialect's type table
    #[error("No translation for '{field_type}' available in {dialect}")]
    UnknownFieldType {
        /// 抽象型名
        field_type: String,
        /// 対象の方言
        dialect: String,
    },

    /// Statement kind without a template in the dialect
    #[error("{operation} is not supported by {dialect}")]
    UnsupportedOperation {
        /// 文の種類
        operation: String,
        /// 対象の方言
        dialect: String,
    },

    /// Operation intentionally left unimplemented
    #[error("{operation} is not implemented for {dialect}")]
    NotImplemented {
        /// 操作名
        operation: String,
        /// 対象の方言
        dialect: String,
    },

    /// Value that cannot be coerced to the requested kind
    #[error("Invalid value '{value}' for {kind}: {reason}")]
    InvalidValue {
        /// 変換元の値
        value: String,
        /// 変換先の種類
        kind: String,
        /// 失敗の理由
        reason: String,
    },

    /// Template placeholder without a supplied value
    #[error("No value supplied for placeholder '{{{placeholder}}}'")]
    UnresolvedPlaceholder {
        /// プレースホルダー名
        placeholder: String,
    },
}

impl DialectError {
    /// 値変換エラーを作成
    pub fn invalid_value(
        value: impl Into<String>,
        kind: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DialectError::InvalidValue {
            value: value.into(),
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// 未対応方言エラーかどうか
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self, DialectError::UnsupportedDialect { .. })
    }

    /// 未知の抽象型エラーかどうか
    pub fn is_unknown_field_type(&self) -> bool {
        matches!(self, DialectError::UnknownFieldType { .. })
    }

    /// 未対応操作エラーかどうか
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, DialectError::UnsupportedOperation { .. })
    }

    /// 未実装エラーかどうか
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, DialectError::NotImplemented { .. })
    }

    /// 値変換エラーかどうか
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, DialectError::InvalidValue { .. })
    }

    /// 未解決プレースホルダーエラーかどうか
    pub fn is_unresolved_placeholder(&self) -> bool {
        matches!(self, DialectError::UnresolvedPlaceholder { .. })
    }
}

/// I/Oエラー
///
/// 定義ファイルの操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// ファイルパス
        path: String,
    },

    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, IoError::FileNotFound { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, IoError::FileRead { .. })
    }
}
