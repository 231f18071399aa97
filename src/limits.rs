//! Syntax limits for block classification.

/// Deepest ATX heading level (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Maximum digits in an ordered list marker (prevents big-integer parsing).
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_reasonable() {
        const { assert!(MAX_HEADING_LEVEL == 6) };
        // 9 digits always fit in a u32
        const { assert!(MAX_LIST_MARKER_DIGITS <= 9) };
    }
}
