pub mod config;
pub mod data;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod number_format;
