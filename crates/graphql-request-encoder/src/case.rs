/// Convert a capitalized field name to the lower-initial style used in
/// request documents.
///
/// Only the first character is lowered; internal capitals are preserved, so
/// `UserID` becomes `userID`, not `userId`. Names shorter than two
/// characters pass through unchanged.
///
/// ### Example
/// ```rust
/// use graphql_request_encoder::to_field_case;
///
/// assert_eq!(to_field_case("FirstName"), "firstName");
/// assert_eq!(to_field_case("UserID"), "userID");
/// assert_eq!(to_field_case("X"), "X");
/// ```
pub fn to_field_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !chars.as_str().is_empty() => {
            let mut converted = String::with_capacity(name.len());
            converted.extend(first.to_lowercase());
            converted.push_str(chars.as_str());
            converted
        }
        _ => name.to_owned(),
    }
}
