mod rental;

pub use self::rental::*;
