//! <div align="center">
//!   <h1><code>graphql-request-encoder</code></h1>
//!
//!   <p>
//!     <strong>A library to serialise schema-described objects into GraphQL
//!     request documents.</strong>
//!   </p>
//! </div>
//!
//! Types describe their own fields through the [`ObjectSchema`] trait — own
//! declared fields plus one descriptor list per implemented interface. From
//! that description the encoder derives a deduplicated [`FieldCatalog`] and
//! renders complete `query`/`mutation` documents, already escaped for
//! embedding inside a JSON `"query"` envelope.
//!
//! ## Getting started
//! Add this to your `Cargo.toml` to start using `graphql-request-encoder`:
//! ```toml
//! # Just an example, change to the necessary package version.
//! [dependencies]
//! graphql-request-encoder = "0.1.0"
//! ```
//!
//! ## Example
//! ```rust
//! use graphql_request_encoder::{
//!     build_mutation, build_query, FieldDescriptor, ObjectSchema, Scalar,
//! };
//!
//! struct User {
//!     name: String,
//!     age: i64,
//!     nickname: Option<String>,
//! }
//!
//! impl ObjectSchema for User {
//!     fn fields() -> Vec<FieldDescriptor<Self>> {
//!         vec![
//!             FieldDescriptor::new("Name", |u| Some(Scalar::from(u.name.clone()))),
//!             FieldDescriptor::new("Age", |u| Some(Scalar::from(u.age))),
//!             FieldDescriptor::new("Nickname", |u| u.nickname.clone().map(Scalar::from)),
//!         ]
//!     }
//! }
//!
//! let query = build_query::<User>("users", "id", "42", false).unwrap();
//! assert_eq!(
//!     query,
//!     r#"{ "query": "query {users(id: \"42\"){name age nickname }}" }"#
//! );
//!
//! let user = User {
//!     name: String::from("Ann"),
//!     age: 30,
//!     nickname: None,
//! };
//! let mutation = build_mutation(&user, "addUser", "user").unwrap();
//! assert_eq!(
//!     mutation,
//!     r#"{ "query": "mutation {addUser(user: {name: \"Ann\" age: 30 }){name age nickname }}" }"#
//! );
//! ```
//!
//! ## License
//! Licensed under either of
//!
//! - Apache License, Version 2.0 (<https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license (<https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod case;
mod catalog;
mod error;
mod field;
mod matcher;
mod parameters;
mod projection;
mod request;
mod scalar;

pub use case::to_field_case;
pub use catalog::{FieldCatalog, ObjectSchema};
pub use error::BuildError;
pub use field::FieldDescriptor;
pub use matcher::{contains, contains_by_fields};
pub use parameters::{IdParameters, ObjectParameters};
pub use projection::Projection;
pub use request::{build_mutation, build_query};
pub use scalar::Scalar;
