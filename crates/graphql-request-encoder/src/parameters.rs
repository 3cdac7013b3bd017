use std::fmt;

use crate::{to_field_case, BuildError, FieldCatalog};

/// The `IdParameters` type represents the identifier-style parameter clause
/// of a query request: an optional identifier filter plus an optional
/// `includeInactive` flag.
///
/// When the identifier value is empty and the flag is off, no clause is
/// rendered at all, so the request carries no empty argument list. A flag
/// left at `false` is treated as not requested and never rendered.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::IdParameters;
///
/// assert_eq!(IdParameters::new("id", "42", false).to_string(), r#"(id: \"42\")"#);
/// assert_eq!(IdParameters::new("id", "", false).to_string(), "");
/// assert_eq!(
///     IdParameters::new("id", "", true).to_string(),
///     "( includeInactive: true)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParameters<'a> {
    key: &'a str,
    value: &'a str,
    include_inactive: bool,
}

impl<'a> IdParameters<'a> {
    /// Create a new instance of IdParameters. An empty `value` means the
    /// identifier filter is absent.
    pub fn new(key: &'a str, value: &'a str, include_inactive: bool) -> Self {
        Self {
            key,
            value,
            include_inactive,
        }
    }
}

impl fmt::Display for IdParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() && !self.include_inactive {
            return Ok(());
        }

        write!(f, "(")?;
        if !self.value.is_empty() {
            write!(f, "{}: \\\"{}\\\"", self.key, self.value)?;
        }
        if self.include_inactive {
            write!(f, " includeInactive: true")?;
        }
        write!(f, ")")
    }
}

/// The `ObjectParameters` type represents the object-valued parameter clause
/// of a mutation request: every catalog field with a present value, rendered
/// as `name: literal` inside `(objectType: {...})`.
///
/// Fields whose accessor yields `None` are omitted entirely, never rendered
/// as `null`; this is what makes partial-update mutations work without any
/// presence-tracking structure.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{
///     FieldCatalog, FieldDescriptor, ObjectParameters, ObjectSchema, Scalar,
/// };
///
/// struct Person {
///     name: String,
///     note: Option<String>,
/// }
///
/// impl ObjectSchema for Person {
///     fn fields() -> Vec<FieldDescriptor<Self>> {
///         vec![
///             FieldDescriptor::new("Name", |p| Some(Scalar::from(p.name.clone()))),
///             FieldDescriptor::new("Note", |p| p.note.clone().map(Scalar::from)),
///         ]
///     }
/// }
///
/// let person = Person {
///     name: String::from("Ann"),
///     note: None,
/// };
/// let catalog = FieldCatalog::<Person>::of();
/// let params = ObjectParameters::new(&catalog, &person, "person").unwrap();
///
/// assert_eq!(params.to_string(), r#"(person: {name: \"Ann\" })"#);
/// ```
pub struct ObjectParameters<'a, T: ?Sized> {
    catalog: &'a FieldCatalog<T>,
    instance: &'a T,
    object_type: &'a str,
}

impl<'a, T: ?Sized> ObjectParameters<'a, T> {
    /// Create a new instance of ObjectParameters.
    ///
    /// Returns [`BuildError::InvalidArgument`] if `object_type` is empty.
    pub fn new(
        catalog: &'a FieldCatalog<T>,
        instance: &'a T,
        object_type: &'a str,
    ) -> Result<Self, BuildError> {
        if object_type.is_empty() {
            return Err(BuildError::InvalidArgument(
                "object type name must not be empty",
            ));
        }

        Ok(Self {
            catalog,
            instance,
            object_type,
        })
    }
}

impl<T: ?Sized> fmt::Display for ObjectParameters<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {{", self.object_type)?;
        for field in self.catalog.iter() {
            if let Some(value) = field.read(self.instance) {
                write!(f, "{}: {} ", to_field_case(field.name()), value)?;
            }
        }
        write!(f, "}})")
    }
}

impl<T: ?Sized> fmt::Debug for ObjectParameters<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectParameters")
            .field("catalog", &self.catalog)
            .field("object_type", &self.object_type)
            .finish_non_exhaustive()
    }
}
