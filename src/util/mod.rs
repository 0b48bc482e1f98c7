pub mod clock;
pub mod format;
pub mod parse;
