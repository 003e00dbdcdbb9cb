pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::TomlConfig;
pub use core::{
    etl::MappingEngine,
    mapper::{Mapper, MapperConfiguration, Profile},
    pipeline::MappingPipeline,
    profile::{build_mapper, MapperProfile},
};
pub use utils::error::{ApprovalError, Result};
