pub mod check_pattern;
pub mod edit_config;
pub mod help;
pub mod show_config;
pub mod validate_config;
pub mod version;
