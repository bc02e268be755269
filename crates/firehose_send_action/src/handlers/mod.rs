pub mod entry;
pub mod send;
