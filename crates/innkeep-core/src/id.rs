/// Generates a fresh record identifier.
///
/// Identifiers are random UUID v4 values in canonical string form; the string
/// form is what gets stored, compared, and serialized.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
