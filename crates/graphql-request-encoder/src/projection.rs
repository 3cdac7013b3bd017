use std::fmt;

use crate::{to_field_case, FieldCatalog};

/// The `Projection` type represents the field-selection clause of a request:
/// every catalog field name, case-converted, space-separated, wrapped in
/// braces.
///
/// An empty catalog still renders as `{}`.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{FieldCatalog, FieldDescriptor, ObjectSchema, Projection, Scalar};
///
/// struct User {
///     first_name: String,
///     age: i64,
/// }
///
/// impl ObjectSchema for User {
///     fn fields() -> Vec<FieldDescriptor<Self>> {
///         vec![
///             FieldDescriptor::new("FirstName", |u| Some(Scalar::from(u.first_name.clone()))),
///             FieldDescriptor::new("Age", |u| Some(Scalar::from(u.age))),
///         ]
///     }
/// }
///
/// let catalog = FieldCatalog::<User>::of();
/// assert_eq!(Projection::new(&catalog).to_string(), "{firstName age }");
/// ```
pub struct Projection<'a, T: ?Sized> {
    catalog: &'a FieldCatalog<T>,
}

impl<'a, T: ?Sized> Projection<'a, T> {
    /// Create a new instance of Projection over a catalog.
    pub fn new(catalog: &'a FieldCatalog<T>) -> Self {
        Self { catalog }
    }
}

impl<T: ?Sized> fmt::Display for Projection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for field in self.catalog.iter() {
            write!(f, "{} ", to_field_case(field.name()))?;
        }
        write!(f, "}}")
    }
}

impl<T: ?Sized> fmt::Debug for Projection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("catalog", &self.catalog)
            .finish()
    }
}
