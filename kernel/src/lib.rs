pub use crate::error::*;

mod clock;
mod credit;
mod database;
mod entity;
mod error;
mod modify;
mod notify;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod database {
        pub use crate::database::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
    pub mod credit {
        pub use crate::credit::*;
    }
    pub mod notify {
        pub use crate::notify::*;
    }
    pub mod clock {
        pub use crate::clock::*;
    }
}
