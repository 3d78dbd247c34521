pub mod header;
pub mod pack;
pub mod plan;
