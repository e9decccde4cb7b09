///
/// enum_value!
///
/// Implements `EnumValue`, `FieldValue`, and `FieldTarget` for a
/// unit-variant enum from its discriminant table. The enum must derive
/// `Copy`, `Clone`, and `Default` (the default variant is the null
/// sentinel for non-`Option` fields).
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// enum Status {
///     #[default]
///     Draft,
///     Shipped,
/// }
///
/// enum_value!(Status { Draft = 0, Shipped = 1 });
/// ```
///

#[macro_export]
macro_rules! enum_value {
    ($ty:ident { $($variant:ident = $repr:literal),+ $(,)? }) => {
        impl $crate::traits::EnumValue for $ty {
            fn from_repr(repr: i64) -> Option<Self> {
                match repr {
                    $($repr => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn repr(self) -> i64 {
                match self {
                    $(Self::$variant => $repr,)+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }
        }

        impl $crate::traits::FieldValue for $ty {
            const KIND: $crate::value::FieldKind = $crate::value::FieldKind::Enum;

            fn from_value(
                value: $crate::value::Value,
            ) -> Result<Self, $crate::value::ValueError> {
                match value {
                    $crate::value::Value::Int(repr) => {
                        <Self as $crate::traits::EnumValue>::from_repr(repr).ok_or(
                            $crate::value::ValueError::EnumRepr {
                                repr,
                                enum_name: stringify!($ty),
                            },
                        )
                    }
                    other => Err($crate::value::ValueError::Mismatch {
                        expected: $crate::value::FieldKind::Enum,
                        found: other.label(),
                    }),
                }
            }
        }

        impl $crate::traits::FieldTarget for $ty {
            const KIND: $crate::value::FieldKind = $crate::value::FieldKind::Enum;

            fn from_nullable(
                value: Option<$crate::value::Value>,
            ) -> Result<Self, $crate::value::ValueError> {
                match value {
                    Some(v) => <Self as $crate::traits::FieldValue>::from_value(v),
                    None => Ok(Self::default()),
                }
            }
        }
    };
}
