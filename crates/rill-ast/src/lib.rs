pub mod ast;
pub mod pretty;
pub mod source;
pub mod token;
