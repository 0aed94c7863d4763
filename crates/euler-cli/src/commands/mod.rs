pub mod analyze;
pub mod demo;
pub mod load;
pub mod path;
pub mod version;
