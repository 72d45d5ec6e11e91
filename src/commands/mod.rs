pub mod interactive;
pub mod list;
pub mod toggle;

pub use interactive::*;
pub use list::*;
pub use toggle::*;
