// Rust guideline compliant 2026-10-16

//! Implementation of the `tb hex` command.

/// Prints a parsed hexadecimal value in decimal and normalized hex.
pub fn execute(value: i64) {
    if value < 0 {
        println!("{value}\t-0x{:x}", value.unsigned_abs());
    } else {
        println!("{value}\t0x{value:x}");
    }
}
