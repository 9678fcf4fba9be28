mod pointers;
mod types;

pub use pointers::ActivePointers;
pub use types::*;
