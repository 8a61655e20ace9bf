/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, and for validating
/// shift amounts before they reach the checked shift operations.
///
/// All functions report failure through `Result` or `Option` instead of
/// silently truncating.
pub mod num;
