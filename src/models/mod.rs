pub mod portfolio;
pub mod properties;
