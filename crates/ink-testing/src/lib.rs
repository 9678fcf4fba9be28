//! Testing utilities and harness for ink views

pub mod testing;

pub use testing::*;

pub mod prelude {
    pub use crate::testing::*;
}
