pub mod interpreter;

pub mod error;
