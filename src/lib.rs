pub mod error;

pub mod rational;

pub mod config;

pub mod dispatcher;

pub mod prelude {
    pub use crate::config::ReplConfig;
    pub use crate::dispatcher::{DispatchResult, Dispatcher};
    pub use crate::error::RationalError;
    pub use crate::rational::prelude::*;
}
