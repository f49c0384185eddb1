pub mod card;
pub mod catalog;
pub mod enums;
pub mod list;
pub mod object;
pub mod request_error;
pub mod ruling;

pub use card::*;
pub use catalog::*;
pub use enums::*;
pub use list::*;
pub use object::{Object, WireObject};
pub use request_error::*;
pub use ruling::*;
