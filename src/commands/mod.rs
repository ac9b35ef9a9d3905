pub mod interactive;
pub mod split;

pub use interactive::*;
pub use split::*;
