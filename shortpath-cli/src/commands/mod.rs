pub mod classic;
pub mod common;
pub mod triangle;
