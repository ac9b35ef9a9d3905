pub mod config;
pub mod delimiter;
pub mod split;

pub use config::*;
pub use delimiter::*;
pub use split::*;
