pub mod keys;

pub use keys::{map_key, InputCommand};
