//! Domain types shared by the pipeline and the HTTP layer.

pub mod case;
pub mod enums;
pub mod issues;

pub use case::*;
pub use enums::*;
pub use issues::*;
