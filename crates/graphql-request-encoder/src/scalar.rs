use std::fmt;

/// The `Scalar` type represents a runtime value rendered as a literal inside
/// a request document.
///
/// The dispatch is a closed three-way policy: numeric values render as plain
/// decimal text, booleans as lowercase `true`/`false`, and everything else is
/// carried as [`Scalar::Text`] and rendered inside backslash-escaped double
/// quotes so the literal stays valid when the whole document is embedded in a
/// JSON string. Timestamps and unique identifiers arrive through
/// [`Scalar::text`] and render exactly like strings.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::Scalar;
///
/// assert_eq!(Scalar::from(30).to_string(), "30");
/// assert_eq!(Scalar::from(true).to_string(), "true");
/// assert_eq!(Scalar::from("Ann").to_string(), r#"\"Ann\""#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Integer value example: `7`
    Int(i64),
    /// Float value example: `25.4`
    Float(f64),
    /// Boolean value example: `false`
    Boolean(bool),
    /// Any other kind, rendered quoted: `\"2023-01-01T00:00:00Z\"`
    Text(String),
}

impl Scalar {
    /// Build a [`Scalar::Text`] from any displayable value, such as a
    /// timestamp or a unique identifier.
    pub fn text<V: ToString>(value: V) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "\\\"{s}\\\""),
        }
    }
}

macro_rules! to_number_scalar {
    ($ty: path, $inner_type: path, $scalar_variant: ident) => {
        impl From<$ty> for Scalar {
            fn from(val: $ty) -> Self {
                Self::$scalar_variant(val as $inner_type)
            }
        }
    };
    ($({$ty: path, $inner_type: path, $scalar_variant: ident}),+) => {
        $(
            to_number_scalar!($ty, $inner_type, $scalar_variant);
        )+
    };
}

// Numbers
to_number_scalar!(
    {i64, i64, Int},
    {i32, i64, Int},
    {i16, i64, Int},
    {i8, i64, Int},
    {isize, i64, Int},
    {u64, i64, Int},
    {u32, i64, Int},
    {u16, i64, Int},
    {u8, i64, Int},
    {usize, i64, Int},
    {f64, f64, Float},
    {f32, f64, Float}
);

impl From<String> for Scalar {
    fn from(val: String) -> Self {
        Self::Text(val)
    }
}

impl From<&str> for Scalar {
    fn from(val: &str) -> Self {
        Self::Text(val.to_string())
    }
}

impl From<bool> for Scalar {
    fn from(val: bool) -> Self {
        Self::Boolean(val)
    }
}
