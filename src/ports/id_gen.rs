//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Implemented by `SerialIdGenerator`; callers that only need opaque ids can
/// hold a `&dyn IdGenerator` and stay independent of the id layout.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
