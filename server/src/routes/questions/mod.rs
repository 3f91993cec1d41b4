mod get_all;
mod get_one;

pub use self::get_all::*;
pub use self::get_one::*;
