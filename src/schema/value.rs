//! Runtime field values and their ordering.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Declared value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    Text,
    Date,
    DateTime,
    Timestamp,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Uint => "uint",
            FieldKind::Float => "float",
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}

/// A field value read off a record at runtime.
///
/// `Null` stands for an absent optional value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Kind of this value, `None` for `Null`.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(_) => Some(FieldKind::Bool),
            FieldValue::Int(_) => Some(FieldKind::Int),
            FieldValue::Uint(_) => Some(FieldKind::Uint),
            FieldValue::Float(_) => Some(FieldKind::Float),
            FieldValue::Text(_) => Some(FieldKind::Text),
            FieldValue::Date(_) => Some(FieldKind::Date),
            FieldValue::DateTime(_) => Some(FieldKind::DateTime),
            FieldValue::Timestamp(_) => Some(FieldKind::Timestamp),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Int(_) | FieldValue::Uint(_) | FieldValue::Float(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Date(_) => 4,
            FieldValue::DateTime(_) => 5,
            FieldValue::Timestamp(_) => 6,
        }
    }
}

/// Total order over field values.
///
/// Same-kind values compare natively. Numeric kinds compare with each other
/// by value (floats use IEEE total order). `Null` sorts before everything;
/// other mixed kinds fall back to a fixed kind rank so the order stays total.
pub fn compare_values(left: &FieldValue, right: &FieldValue) -> Ordering {
    use FieldValue::*;

    match (left, right) {
        (Null, Null) => Ordering::Equal,
        (Bool(a), Bool(b)) => a.cmp(b),
        (Int(a), Int(b)) => a.cmp(b),
        (Uint(a), Uint(b)) => a.cmp(b),
        (Float(a), Float(b)) => a.total_cmp(b),
        (Int(a), Uint(b)) => compare_int_uint(*a, *b),
        (Uint(a), Int(b)) => compare_int_uint(*b, *a).reverse(),
        (Int(a), Float(b)) => compare_integer_float(i128::from(*a), *b),
        (Float(a), Int(b)) => compare_integer_float(i128::from(*b), *a).reverse(),
        (Uint(a), Float(b)) => compare_integer_float(i128::from(*a), *b),
        (Float(a), Uint(b)) => compare_integer_float(i128::from(*b), *a).reverse(),
        (Text(a), Text(b)) => a.cmp(b),
        (Date(a), Date(b)) => a.cmp(b),
        (DateTime(a), DateTime(b)) => a.cmp(b),
        (Timestamp(a), Timestamp(b)) => a.cmp(b),
        _ => left.rank().cmp(&right.rank()),
    }
}

fn compare_int_uint(signed: i64, unsigned: u64) -> Ordering {
    match u64::try_from(signed) {
        Ok(signed) => signed.cmp(&unsigned),
        Err(_) => Ordering::Less,
    }
}

/// Exact comparison of a 64-bit integer with a float. Going through `as f64`
/// would round integers above 2^53.
fn compare_integer_float(integer: i128, float: f64) -> Ordering {
    // 2^64 and -2^63 are exact in f64 and bound every i64/u64.
    const UPPER: f64 = 18_446_744_073_709_551_616.0;
    const LOWER: f64 = -9_223_372_036_854_775_808.0;

    if float.is_nan() {
        // Same placement as `f64::total_cmp`: sign decides the end.
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= UPPER {
        return Ordering::Less;
    }
    if float < LOWER {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    // In range, so the cast is exact.
    match integer.cmp(&(whole as i128)) {
        Ordering::Equal => 0f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
        unequal => unequal,
    }
}

/// Rust types that can back a sortable field.
pub trait FieldType: Into<FieldValue> {
    const KIND: FieldKind;
}

macro_rules! field_type {
    ($kind:ident, $variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    FieldValue::$variant(<$target>::from(v))
                }
            }

            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::$kind;
            }
        )+
    };
}

field_type!(Bool, Bool as bool: bool);
field_type!(Int, Int as i64: i8, i16, i32, i64);
field_type!(Uint, Uint as u64: u8, u16, u32, u64);
field_type!(Float, Float as f64: f32, f64);
field_type!(Text, Text as String: String, &str, char);
field_type!(Date, Date as NaiveDate: NaiveDate);
field_type!(DateTime, DateTime as NaiveDateTime: NaiveDateTime);
field_type!(Timestamp, Timestamp as DateTime<Utc>: DateTime<Utc>);

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::Uint(v as u64)
    }
}

impl FieldType for usize {
    const KIND: FieldKind = FieldKind::Uint;
}

impl<V: FieldType> From<Option<V>> for FieldValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

impl<V: FieldType> FieldType for Option<V> {
    const KIND: FieldKind = V::KIND;
}
