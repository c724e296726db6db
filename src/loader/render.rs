use super::model::UserRecord;

/// Render users as `<p>{name} - {email}</p>` fragments, concatenated in order
/// with no separator.
///
/// Values are inserted verbatim: `<`, `>` and `&` are not escaped.
#[must_use]
pub fn render(users: &[UserRecord]) -> String {
    users
        .iter()
        .map(|user| format!("<p>{} - {}</p>", user.name, user.email))
        .collect()
}
