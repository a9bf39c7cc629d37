#[macro_use] extern crate bitflags;
#[macro_use] extern crate failure;
#[macro_use] extern crate failure_derive;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

pub use self::config::Config;

#[macro_use] mod macros;

pub mod access;
pub mod audit;
pub mod capabilities;
pub mod config;
pub mod filters;
pub mod i18n;
pub mod models;
pub mod store;

pub type Result<T, E=failure::Error> = std::result::Result<T, E>;
