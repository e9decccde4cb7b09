use crate::{
    metadata::EntityMap,
    types::{Date, Decimal, Timestamp, Ulid},
    value::{FieldKind, Value, ValueError},
};

///
/// Entity
///
/// Declaration contract for a mapped type. Implementing this trait is the
/// Rust rendition of marking a type as participating in mapping; `declare`
/// runs once per registry when the type's metadata is first built.
///

pub trait Entity: Default + Sized + 'static {
    /// Diagnostic name, conventionally the bare type name.
    const NAME: &'static str;

    fn declare(map: &mut EntityMap<Self>);
}

///
/// EnumValue
///
/// Discriminant table for enums that participate in field mapping.
/// Usually implemented through the `enum_value!` macro.
///

pub trait EnumValue: Copy + Sized + 'static {
    fn from_repr(repr: i64) -> Option<Self>;

    fn repr(self) -> i64;

    fn name(self) -> &'static str;
}

///
/// FieldValue
///
/// Narrowing from a converter-normalized `Value` into a concrete field
/// type. The converter guarantees the variant matches `KIND`; a mismatch
/// here is an engine invariant breach and still reports as a conversion
/// failure rather than a panic.
///

pub trait FieldValue: Sized + 'static {
    const KIND: FieldKind;

    fn from_value(value: Value) -> Result<Self, ValueError>;
}

///
/// FieldTarget
///
/// A field's full target shape, including nullability. `Option<F>` maps
/// null to `None`; bare scalars map null to their default. Registration
/// resolves `KIND` through this trait, which is how optional wrappers are
/// unwrapped exactly once.
///

pub trait FieldTarget: Sized + 'static {
    const KIND: FieldKind;

    fn from_nullable(value: Option<Value>) -> Result<Self, ValueError>;
}

impl<F: FieldValue> FieldTarget for Option<F> {
    const KIND: FieldKind = F::KIND;

    fn from_nullable(value: Option<Value>) -> Result<Self, ValueError> {
        value.map(F::from_value).transpose()
    }
}

macro_rules! impl_field_value {
    ($ty:ty, $kind:ident, $pat:pat => $out:expr) => {
        impl FieldValue for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    $pat => $out,
                    other => Err(ValueError::Mismatch {
                        expected: <Self as FieldValue>::KIND,
                        found: other.label(),
                    }),
                }
            }
        }
    };
}

impl_field_value!(bool, Bool, Value::Bool(v) => Ok(v));
impl_field_value!(i64, Int, Value::Int(v) => Ok(v));
impl_field_value!(i32, Int, Value::Int(v) => i32::try_from(v).map_err(|_| ValueError::OutOfRange {
    value: v.to_string(),
    to: FieldKind::Int,
}));
impl_field_value!(u64, Uint, Value::Uint(v) => Ok(v));
impl_field_value!(u32, Uint, Value::Uint(v) => u32::try_from(v).map_err(|_| ValueError::OutOfRange {
    value: v.to_string(),
    to: FieldKind::Uint,
}));
impl_field_value!(f64, Float, Value::Float(v) => Ok(v));
impl_field_value!(f32, Float, Value::Float(v) => {
    let narrowed = v as Self;
    if v.is_finite() && !narrowed.is_finite() {
        Err(ValueError::OutOfRange {
            value: v.to_string(),
            to: FieldKind::Float,
        })
    } else {
        Ok(narrowed)
    }
});
impl_field_value!(Decimal, Decimal, Value::Decimal(v) => Ok(v));
impl_field_value!(String, Text, Value::Text(v) => Ok(v));
impl_field_value!(Date, Date, Value::Date(v) => Ok(v));
impl_field_value!(Timestamp, Timestamp, Value::Timestamp(v) => Ok(v));
impl_field_value!(Ulid, Ulid, Value::Ulid(v) => Ok(v));

macro_rules! impl_field_target {
    ($($ty:ty => $null:expr),* $(,)?) => {$(
        impl FieldTarget for $ty {
            const KIND: FieldKind = <$ty as FieldValue>::KIND;

            fn from_nullable(value: Option<Value>) -> Result<Self, ValueError> {
                match value {
                    Some(v) => Self::from_value(v),
                    None => Ok($null),
                }
            }
        }
    )*};
}

impl_field_target! {
    bool => false,
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    f32 => 0.0,
    f64 => 0.0,
    Decimal => Decimal::ZERO,
    String => Self::new(),
    Date => Date::EPOCH,
    Timestamp => Timestamp::EPOCH,
    Ulid => Ulid::nil(),
}
