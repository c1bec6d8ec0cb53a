use uuid::Uuid;

/// Deterministic UUIDv5 from an arbitrary string id.
///
/// Used for vector-store point ids so repeated ingestion of the same
/// content upserts instead of duplicating.
pub fn stable_uuid(id: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, id.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_input_same_uuid() {
        let a = stable_uuid("https://example.com/page|chunk text");
        let b = stable_uuid("https://example.com/page|chunk text");
        assert_eq!(a, b);
    }

    #[test]
    fn different_input_different_uuid() {
        assert_ne!(stable_uuid("a"), stable_uuid("b"));
    }
}
