/// Schema-shape check command.
pub mod check;
/// Schema decode command.
pub mod decode;
/// Schema encode command.
pub mod encode;
/// Value tree printing.
pub mod print;
/// Encode/decode round-trip command.
pub mod roundtrip;
pub(crate) mod util;
