pub mod console;
pub mod reader;
pub mod writer;
