use std::fmt;

use crate::Scalar;

/// The `FieldDescriptor` type represents one named, readable field of a
/// schema-described type: a name plus an accessor that reads the field's
/// current value from an instance.
///
/// An accessor returning `None` marks the value as absent; absent fields are
/// omitted from rendered output rather than encoded as `null`.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{FieldDescriptor, Scalar};
///
/// struct User {
///     name: String,
/// }
///
/// let descriptor: FieldDescriptor<User> =
///     FieldDescriptor::new("Name", |u| Some(Scalar::from(u.name.clone())));
/// let user = User { name: String::from("Ann") };
///
/// assert_eq!(descriptor.name(), "Name");
/// assert_eq!(descriptor.read(&user), Some(Scalar::from("Ann")));
/// ```
pub struct FieldDescriptor<T: ?Sized> {
    name: &'static str,
    read: fn(&T) -> Option<Scalar>,
}

impl<T: ?Sized> FieldDescriptor<T> {
    /// Create a new instance of FieldDescriptor.
    pub fn new(name: &'static str, read: fn(&T) -> Option<Scalar>) -> Self {
        Self { name, read }
    }

    /// The field's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the field's current value from an instance, `None` if absent.
    pub fn read(&self, instance: &T) -> Option<Scalar> {
        (self.read)(instance)
    }
}

// Manual impls so `T` itself does not need to be Clone/Copy/Debug.
impl<T: ?Sized> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for FieldDescriptor<T> {}

impl<T: ?Sized> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
