pub mod png;
pub mod wav;
