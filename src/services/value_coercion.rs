// 値変換サービス
//
// スカラー値の分類、ネイティブ表現への変換、SQLリテラルへの変換を行います。

use crate::core::error::DialectError;
use crate::core::value::{NativeKind, Value, ValueClass};
use tracing::debug;

/// 真として扱う文字列（小文字で比較）
const TRUTHY: [&str; 4] = ["y", "yes", "true", "1"];

/// 値を大分類する
///
/// 整数は `Int`、浮動小数点数は値が整数であっても `Float`、それ以外は `Str`。
pub fn classify(value: &Value) -> ValueClass {
    match value {
        Value::Integer(_) => ValueClass::Int,
        Value::Float(_) => ValueClass::Float,
        Value::Text(_) | Value::Null => ValueClass::Str,
    }
}

/// 値から抽象型を推定する
pub fn infer_field_type(value: &Value) -> &'static str {
    match classify(value) {
        ValueClass::Int => "integer",
        ValueClass::Float => "float",
        ValueClass::Str => "text",
    }
}

/// 種類名を指定して値を変換する
///
/// 認識できない種類名は文字列としてそのまま通します。
///
/// # Errors
///
/// 値を指定の種類へ変換できない場合は `InvalidValue`
pub fn retype(raw: &Value, target_kind: &str) -> Result<Value, DialectError> {
    match target_kind.parse::<NativeKind>() {
        Ok(kind) => retype_as(raw, kind),
        Err(()) => {
            debug!(kind = %target_kind, "Unrecognized value kind, passing through as text");
            Ok(as_text(raw))
        }
    }
}

/// ネイティブ値の種類を指定して値を変換する
///
/// # Errors
///
/// 値を指定の種類へ変換できない場合は `InvalidValue`
pub fn retype_as(raw: &Value, kind: NativeKind) -> Result<Value, DialectError> {
    match kind {
        NativeKind::None => Ok(Value::Null),
        NativeKind::Integer => to_integer(raw).map(Value::Integer),
        NativeKind::Float => to_float(raw).map(Value::Float),
        NativeKind::String | NativeKind::Blob => Ok(as_text(raw)),
        NativeKind::Boolean => match raw {
            Value::Text(s) => {
                let truthy = TRUTHY.contains(&s.to_lowercase().as_str());
                Ok(Value::Integer(i64::from(truthy)))
            }
            other => Err(DialectError::invalid_value(
                other.to_string(),
                kind.as_str(),
                "boolean input must be text",
            )),
        },
    }
}

fn as_text(raw: &Value) -> Value {
    match raw {
        Value::Text(_) => raw.clone(),
        other => Value::Text(other.to_string()),
    }
}

fn to_integer(raw: &Value) -> Result<i64, DialectError> {
    match raw {
        Value::Integer(i) => Ok(*i),
        Value::Float(f) if f.is_finite() => {
            let truncated = f.trunc();
            // i64::MAX as f64 は 2^63 に丸められるため上限は未満で比較
            if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                Ok(truncated as i64)
            } else {
                Err(DialectError::invalid_value(
                    raw.to_string(),
                    NativeKind::Integer.as_str(),
                    "out of range",
                ))
            }
        }
        Value::Text(s) => s.trim().parse::<i64>().map_err(|e| {
            DialectError::invalid_value(s.as_str(), NativeKind::Integer.as_str(), e.to_string())
        }),
        other => Err(DialectError::invalid_value(
            other.to_string(),
            NativeKind::Integer.as_str(),
            "not an integer",
        )),
    }
}

fn to_float(raw: &Value) -> Result<f64, DialectError> {
    match raw {
        Value::Integer(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Text(s) => s.trim().parse::<f64>().map_err(|e| {
            DialectError::invalid_value(s.as_str(), NativeKind::Float.as_str(), e.to_string())
        }),
        Value::Null => Err(DialectError::invalid_value(
            raw.to_string(),
            NativeKind::Float.as_str(),
            "not a number",
        )),
    }
}

/// 値をSQLリテラルへ変換する
///
/// 文字列は単一引用符で囲み、内部の引用符は二重化します。
///
/// # Errors
///
/// 有限でない浮動小数点数は `InvalidValue`
pub fn render_literal(value: &Value) -> Result<String, DialectError> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Float(f) if f.is_finite() => Ok(format!("{:?}", f)),
        Value::Float(f) => Err(DialectError::invalid_value(
            f.to_string(),
            NativeKind::Float.as_str(),
            "not a finite number",
        )),
        Value::Text(s) => Ok(format!("'{}'", s.replace('\'', "''"))),
    }
}
