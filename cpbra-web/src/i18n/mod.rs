//! User-facing strings, resolved by dotted key from the bundled English table.

mod bundle;
mod render;

pub use render::{t, tr};
