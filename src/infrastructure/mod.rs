pub mod in_memory;
pub mod json_lines;
pub mod logging;
pub mod simulated_auth;
pub mod static_catalog;
