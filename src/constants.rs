//! Action bits, catalog id layout and tree limits

// Action bit constants
pub const READ: u8 = 1;
pub const CREATE: u8 = 1 << 1;
pub const UPDATE: u8 = 1 << 2;
pub const DELETE: u8 = 1 << 3;
pub const MANAGE: u8 = 1 << 7;

// Built-in catalog ids
pub const MANAGE_ALL_ID: i64 = 1;
pub const READ_ALL_ID: i64 = 2;
/// Subject at position `i` gets `read = BASE + 2i`, `manage = BASE + 2i + 1`
pub const SUBJECT_ID_BASE: i64 = 100;

/// Root, first, second and third level
pub const MAX_DEPTH: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manage_sits_apart_from_concrete_bits() {
        assert_eq!(MANAGE & (READ | CREATE | UPDATE | DELETE), 0);
    }

    #[test]
    fn subject_ids_clear_the_wildcards() {
        assert!(SUBJECT_ID_BASE > MANAGE_ALL_ID.max(READ_ALL_ID));
    }
}
