use crate::{BuildError, FieldCatalog, IdParameters, ObjectParameters, ObjectSchema, Projection};

/// Build a query request document selecting every field of `T`.
///
/// The result is the full JSON envelope, `{ "query": "query {...}" }`, with
/// string literals inside the operation escaped so the envelope stays valid
/// JSON. An empty `id_value` with `include_inactive` off produces a query
/// with no parameter clause at all.
///
/// Returns [`BuildError::InvalidArgument`] if `query_name` is empty.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{build_query, FieldDescriptor, ObjectSchema, Scalar};
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
/// let request = build_query::<User>("users", "id", "42", false).unwrap();
/// assert_eq!(
///     request,
///     r#"{ "query": "query {users(id: \"42\"){name age }}" }"#
/// );
/// ```
pub fn build_query<T: ObjectSchema>(
    query_name: &str,
    id_key: &str,
    id_value: &str,
    include_inactive: bool,
) -> Result<String, BuildError> {
    if query_name.is_empty() {
        return Err(BuildError::InvalidArgument("query name must not be empty"));
    }

    let catalog = FieldCatalog::<T>::of();
    Ok(format!(
        "{{ \"query\": \"query {{{}{}{}}}\" }}",
        query_name,
        IdParameters::new(id_key, id_value, include_inactive),
        Projection::new(&catalog),
    ))
}

/// Build a mutation request document carrying every present field of
/// `instance` as the object-valued argument, and selecting every field of
/// `T` in return.
///
/// Fields whose value is absent are left out of the argument object, so the
/// same call serves full and partial updates.
///
/// Returns [`BuildError::InvalidArgument`] if `mutation_name` or
/// `object_type` is empty.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::{build_mutation, FieldDescriptor, ObjectSchema, Scalar};
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
/// let user = User {
///     name: String::from("Ann"),
///     age: 30,
/// };
/// let request = build_mutation(&user, "updateUser", "user").unwrap();
/// assert_eq!(
///     request,
///     r#"{ "query": "mutation {updateUser(user: {name: \"Ann\" age: 30 }){name age }}" }"#
/// );
/// ```
pub fn build_mutation<T: ObjectSchema>(
    instance: &T,
    mutation_name: &str,
    object_type: &str,
) -> Result<String, BuildError> {
    if mutation_name.is_empty() {
        return Err(BuildError::InvalidArgument(
            "mutation name must not be empty",
        ));
    }

    let catalog = FieldCatalog::<T>::of();
    let parameters = ObjectParameters::new(&catalog, instance, object_type)?;
    Ok(format!(
        "{{ \"query\": \"mutation {{{}{}{}}}\" }}",
        mutation_name,
        parameters,
        Projection::new(&catalog),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{FieldDescriptor, Scalar};

    struct Person {
        name: String,
        age: i64,
        active: bool,
        note: Option<String>,
    }

    impl ObjectSchema for Person {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor::new("Name", |p| Some(Scalar::from(p.name.clone()))),
                FieldDescriptor::new("Age", |p| Some(Scalar::from(p.age))),
                FieldDescriptor::new("Active", |p| Some(Scalar::from(p.active))),
                FieldDescriptor::new("Note", |p| p.note.clone().map(Scalar::from)),
            ]
        }
    }

    fn ann() -> Person {
        Person {
            name: String::from("Ann"),
            age: 30,
            active: true,
            note: None,
        }
    }

    #[test]
    fn it_builds_a_query_with_an_identifier_filter() {
        let request = build_query::<Person>("people", "id", "42", false).unwrap();

        assert_eq!(
            request,
            r#"{ "query": "query {people(id: \"42\"){name age active note }}" }"#
        );
    }

    #[test]
    fn it_builds_a_query_without_a_parameter_clause() {
        let request = build_query::<Person>("people", "id", "", false).unwrap();

        assert_eq!(
            request,
            r#"{ "query": "query {people{name age active note }}" }"#
        );
    }

    #[test]
    fn it_builds_a_query_for_inactive_records_alone() {
        let request = build_query::<Person>("people", "id", "", true).unwrap();

        assert_eq!(
            request,
            r#"{ "query": "query {people( includeInactive: true){name age active note }}" }"#
        );
    }

    #[test]
    fn it_builds_a_mutation_omitting_absent_fields() {
        let request = build_mutation(&ann(), "updatePerson", "person").unwrap();

        assert_eq!(
            request,
            r#"{ "query": "mutation {updatePerson(person: {name: \"Ann\" age: 30 active: true }){name age active note }}" }"#
        );
    }

    #[test]
    fn it_rejects_empty_operation_names() {
        assert_eq!(
            build_query::<Person>("", "id", "42", false).unwrap_err(),
            BuildError::InvalidArgument("query name must not be empty")
        );
        assert_eq!(
            build_mutation(&ann(), "", "person").unwrap_err(),
            BuildError::InvalidArgument("mutation name must not be empty")
        );
    }

    #[test]
    fn it_propagates_an_empty_object_type_name() {
        assert_eq!(
            build_mutation(&ann(), "updatePerson", "").unwrap_err(),
            BuildError::InvalidArgument("object type name must not be empty")
        );
    }

    #[test]
    fn it_is_idempotent_across_calls() {
        let first = build_query::<Person>("people", "id", "42", true).unwrap();
        let second = build_query::<Person>("people", "id", "42", true).unwrap();
        assert_eq!(first, second);

        let first = build_mutation(&ann(), "updatePerson", "person").unwrap();
        let second = build_mutation(&ann(), "updatePerson", "person").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn it_produces_a_valid_json_envelope() {
        let request = build_mutation(&ann(), "updatePerson", "person").unwrap();

        let envelope: serde_json::Value = serde_json::from_str(&request).unwrap();
        let operation = envelope["query"].as_str().unwrap();
        assert_eq!(
            operation,
            r#"mutation {updatePerson(person: {name: "Ann" age: 30 active: true }){name age active note }}"#
        );
    }
}
