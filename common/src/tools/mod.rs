pub mod banner;
pub mod base_converter;
pub mod consent;
pub mod ip_lookup;
pub mod subnet;
pub mod title;
