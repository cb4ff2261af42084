/// Prefix of every entity identifier.
pub const ENTITY_ID_PREFIX: &str = "node_fileProvenance";
/// Prefix of every activity identifier.
pub const ACTIVITY_ID_PREFIX: &str = "activity_";
/// Prefix of every relation (edge) identifier, a blank-node style token.
pub const EDGE_ID_PREFIX: &str = "_:id";

/// Identifier of the `index`-th entity (1-based).
pub fn entity_id(index: usize) -> String {
    format!("{ENTITY_ID_PREFIX}{index}")
}

/// Identifier of the `index`-th activity (1-based).
pub fn activity_id(index: usize) -> String {
    format!("{ACTIVITY_ID_PREFIX}{index}")
}

/// Numeric part of an edge identifier, if it is well formed.
///
/// Leading zeros are malformed so every number has a single spelling.
pub fn parse_edge_id(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(EDGE_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Monotonic source of edge identifiers for one document.
///
/// Starts at `_:id1`; values are never handed out twice.
#[derive(Debug, Clone)]
pub struct EdgeIdSequence {
    next: u64,
}

impl EdgeIdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{EDGE_ID_PREFIX}{}", self.next);
        self.next += 1;
        id
    }

    /// Number of identifiers issued so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for EdgeIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_one_based() {
        assert_eq!(entity_id(1), "node_fileProvenance1");
        assert_eq!(activity_id(12), "activity_12");
    }

    #[test]
    fn edge_sequence_is_monotonic() {
        let mut sequence = EdgeIdSequence::new();
        assert_eq!(sequence.next_id(), "_:id1");
        assert_eq!(sequence.next_id(), "_:id2");
        assert_eq!(sequence.next_id(), "_:id3");
        assert_eq!(sequence.issued(), 3);
    }

    #[test]
    fn parse_edge_id_rejects_malformed_tokens() {
        assert_eq!(parse_edge_id("_:id42"), Some(42));
        assert_eq!(parse_edge_id("_:id"), None);
        assert_eq!(parse_edge_id("_:id-1"), None);
        assert_eq!(parse_edge_id("id42"), None);
        assert_eq!(parse_edge_id("_:id01"), None);
        assert_eq!(parse_edge_id("_:id0"), Some(0));
    }
}
