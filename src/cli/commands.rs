pub mod forecast;
pub mod orders;
pub mod serve;

pub use forecast::forecast;
pub use orders::orders;
pub use serve::serve;
