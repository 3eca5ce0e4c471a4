/// Trait for entities that can be uniquely identified by a string key
///
/// Keys are generated on the client side (see `utils::id_generator`), so they
/// are plain strings rather than database sequences.
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> &str;
}
