use std::collections::HashSet;
use std::fmt;

use crate::FieldDescriptor;

/// Trait implemented by types that describe their own request-document
/// fields.
///
/// This is the schema-description capability the encoder builds on: instead
/// of runtime introspection, each serializable type supplies its ordered
/// field descriptors directly, plus one descriptor list per interface it
/// implements. [`FieldCatalog::of`] merges and deduplicates the lot.
pub trait ObjectSchema {
    /// Fields declared directly on the type, in declaration order.
    fn fields() -> Vec<FieldDescriptor<Self>>;

    /// One descriptor list per interface the type implements.
    fn interfaces() -> Vec<Vec<FieldDescriptor<Self>>> {
        Vec::new()
    }
}

/// The `FieldCatalog` type represents the deduplicated, ordered set of a
/// type's accessible fields: its own declared fields merged with those of
/// every interface it implements.
///
/// A field an interface re-declares appears exactly once, at its first
/// position. A type with no eligible fields yields an empty catalog, not an
/// error.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{FieldCatalog, FieldDescriptor, ObjectSchema, Scalar};
///
/// struct User {
///     name: String,
/// }
///
/// impl ObjectSchema for User {
///     fn fields() -> Vec<FieldDescriptor<Self>> {
///         vec![FieldDescriptor::new("Name", |u| Some(Scalar::from(u.name.clone())))]
///     }
///
///     fn interfaces() -> Vec<Vec<FieldDescriptor<Self>>> {
///         // An interface re-declaring `Name` does not duplicate it.
///         vec![vec![FieldDescriptor::new("Name", |u| {
///             Some(Scalar::from(u.name.clone()))
///         })]]
///     }
/// }
///
/// let catalog = FieldCatalog::<User>::of();
/// assert_eq!(catalog.len(), 1);
/// ```
pub struct FieldCatalog<T: ?Sized> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: ObjectSchema + ?Sized> FieldCatalog<T> {
    /// Derive the catalog for `T`, fresh on every call.
    pub fn of() -> Self {
        let mut fields = T::fields();
        for interface in T::interfaces() {
            fields.extend(interface);
        }
        let mut seen = HashSet::new();
        fields.retain(|field| seen.insert(field.name()));

        Self { fields }
    }
}

impl<T: ?Sized> FieldCatalog<T> {
    /// Iterate the descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter()
    }

    /// Number of fields in the catalog.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for FieldCatalog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCatalog")
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Scalar;

    struct Employee {
        name: String,
        id: String,
        active: bool,
    }

    impl ObjectSchema for Employee {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor::new("Name", |e| Some(Scalar::from(e.name.clone()))),
                FieldDescriptor::new("Id", |e| Some(Scalar::from(e.id.clone()))),
            ]
        }

        fn interfaces() -> Vec<Vec<FieldDescriptor<Self>>> {
            vec![
                // Re-declares `Id` and adds `Active`.
                vec![
                    FieldDescriptor::new("Id", |e| Some(Scalar::from(e.id.clone()))),
                    FieldDescriptor::new("Active", |e| Some(Scalar::from(e.active))),
                ],
                // Re-declares `Name` alone.
                vec![FieldDescriptor::new("Name", |e| {
                    Some(Scalar::from(e.name.clone()))
                })],
            ]
        }
    }

    struct Bare;

    impl ObjectSchema for Bare {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            Vec::new()
        }
    }

    #[test]
    fn it_merges_interface_fields_without_duplicates() {
        let catalog = FieldCatalog::<Employee>::of();

        let names: Vec<&str> = catalog.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Name", "Id", "Active"]);
    }

    #[test]
    fn it_keeps_declaration_order_across_calls() {
        let first: Vec<&str> = FieldCatalog::<Employee>::of().iter().map(|f| f.name()).collect();
        let second: Vec<&str> = FieldCatalog::<Employee>::of().iter().map(|f| f.name()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn it_yields_an_empty_catalog_for_a_fieldless_type() {
        let catalog = FieldCatalog::<Bare>::of();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
