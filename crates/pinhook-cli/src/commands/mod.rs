pub mod lint;
pub mod list;
pub mod sample_config;
pub mod validate;
