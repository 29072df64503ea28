// 値モデル
//
// 文の生成や型変換で扱うスカラー値と、その分類を表現します。

use std::fmt;
use std::str::FromStr;

/// スカラー値
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL
    Null,
    /// 整数
    Integer(i64),
    /// 浮動小数点数
    Float(f64),
    /// 文字列
    Text(String),
}

impl Value {
    /// NULLかどうか
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// 整数値を取得
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// 浮動小数点値を取得
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// 文字列値を取得
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// 値の大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    Int,
    Float,
    Str,
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueClass::Int => write!(f, "int"),
            ValueClass::Float => write!(f, "float"),
            ValueClass::Str => write!(f, "str"),
        }
    }
}

/// ネイティブ値の種類
///
/// 抽象型ごとに、値をどの表現へ変換するかを表します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    None,
    Integer,
    Float,
    String,
    Blob,
    Boolean,
}

impl NativeKind {
    /// 種類名を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            NativeKind::None => "None",
            NativeKind::Integer => "integer",
            NativeKind::Float => "float",
            NativeKind::String => "string",
            NativeKind::Blob => "blob",
            NativeKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NativeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(NativeKind::None),
            "integer" => Ok(NativeKind::Integer),
            "float" => Ok(NativeKind::Float),
            "string" => Ok(NativeKind::String),
            "blob" => Ok(NativeKind::Blob),
            "boolean" => Ok(NativeKind::Boolean),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::Float(12.0).to_string(), "12.0");
        assert_eq!(Value::Float(2.75).to_string(), "2.75");
        assert_eq!(Value::from("Hamburger").to_string(), "Hamburger");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(7).as_i64(), Some(7));
        assert_eq!(Value::Integer(7).as_f64(), Some(7.0));
        assert_eq!(Value::Float(1.5).as_i64(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_native_kind_parse() {
        for kind in [
            NativeKind::None,
            NativeKind::Integer,
            NativeKind::Float,
            NativeKind::String,
            NativeKind::Blob,
            NativeKind::Boolean,
        ] {
            assert_eq!(kind.as_str().parse::<NativeKind>(), Ok(kind));
        }
        assert!("decimal".parse::<NativeKind>().is_err());
    }

    #[test]
    fn test_value_class_display() {
        assert_eq!(ValueClass::Int.to_string(), "int");
        assert_eq!(ValueClass::Float.to_string(), "float");
        assert_eq!(ValueClass::Str.to_string(), "str");
    }
}
