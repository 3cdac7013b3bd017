//! Result-set assertion helpers for integration tests that round-trip
//! objects through a GraphQL endpoint.

use crate::{FieldCatalog, ObjectSchema};

/// Whether `actual` contains an element equal to `expected`.
///
/// Prefer this form when `T` implements [`PartialEq`].
pub fn contains<T: PartialEq>(expected: &T, actual: &[T]) -> bool {
    actual.contains(expected)
}

/// Whether some element of `actual` matches `expected` on every catalog
/// field whose name is not listed in `excluded`.
///
/// Comparison goes through the same accessors the encoder renders with, so
/// two absent values count as a match. An empty result set never matches.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{contains_by_fields, FieldDescriptor, ObjectSchema, Scalar};
///
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl ObjectSchema for User {
///     fn fields() -> Vec<FieldDescriptor<Self>> {
///         vec![
///             FieldDescriptor::new("Name", |u| Some(Scalar::from(u.name.clone()))),
///             FieldDescriptor::new("Age", |u| Some(Scalar::from(u.age))),
///         ]
///     }
/// }
///
/// let expected = User { name: String::from("Ann"), age: 30 };
/// let results = vec![User { name: String::from("Ann"), age: 31 }];
///
/// assert!(!contains_by_fields(&expected, &results, &[]));
/// assert!(contains_by_fields(&expected, &results, &["Age"]));
/// ```
pub fn contains_by_fields<T: ObjectSchema>(expected: &T, actual: &[T], excluded: &[&str]) -> bool {
    let catalog = FieldCatalog::<T>::of();
    actual.iter().any(|item| {
        catalog
            .iter()
            .filter(|field| !excluded.contains(&field.name()))
            .all(|field| field.read(item) == field.read(expected))
    })
}
