use std::fmt;

use serde_json::Value;

/// Declared kind of a destination slot.
///
/// Each variant tags one destination type the coercion engine knows how
/// to write. The engine dispatches on the pair (source [`ValueKind`],
/// destination `TypeKind`) rather than on concrete Rust types, so the
/// conversion table stays finite and inspectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Bool,
    /// Owned text destination (`String`).
    Text,
    /// `std::time::Duration`, populated from duration literals like `"1h30m"`.
    Duration,
    /// Ordered sequence of the inner kind (`Vec<T>`).
    Seq(Box<TypeKind>),
}

impl fmt::Display for TypeKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::I8 => formatter.write_str("i8"),
            TypeKind::I16 => formatter.write_str("i16"),
            TypeKind::I32 => formatter.write_str("i32"),
            TypeKind::I64 => formatter.write_str("i64"),
            TypeKind::Isize => formatter.write_str("isize"),
            TypeKind::U8 => formatter.write_str("u8"),
            TypeKind::U16 => formatter.write_str("u16"),
            TypeKind::U32 => formatter.write_str("u32"),
            TypeKind::U64 => formatter.write_str("u64"),
            TypeKind::Usize => formatter.write_str("usize"),
            TypeKind::F32 => formatter.write_str("f32"),
            TypeKind::F64 => formatter.write_str("f64"),
            TypeKind::Bool => formatter.write_str("bool"),
            TypeKind::Text => formatter.write_str("string"),
            TypeKind::Duration => formatter.write_str("duration"),
            TypeKind::Seq(element) => write!(formatter, "[{element}]"),
        }
    }
}

/// Runtime kind of a source value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The nil marker (`Value::Null`); forces the destination to its zero value.
    Nil,
    Bool,
    /// Any integer number, signed or unsigned.
    Int,
    Float,
    Text,
    Seq,
    /// JSON objects have no destination kind; they only appear in errors.
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Nil => formatter.write_str("nil"),
            ValueKind::Bool => formatter.write_str("bool"),
            ValueKind::Int => formatter.write_str("integer"),
            ValueKind::Float => formatter.write_str("float"),
            ValueKind::Text => formatter.write_str("string"),
            ValueKind::Seq => formatter.write_str("sequence"),
            ValueKind::Map => formatter.write_str("map"),
        }
    }
}

/// Classifies a dynamic value by its runtime kind.
pub fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Nil,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(number) if number.is_f64() => ValueKind::Float,
        Value::Number(_) => ValueKind::Int,
        Value::String(_) => ValueKind::Text,
        Value::Array(_) => ValueKind::Seq,
        Value::Object(_) => ValueKind::Map,
    }
}
