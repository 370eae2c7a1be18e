pub mod choice;
pub mod constants;
pub mod format;
