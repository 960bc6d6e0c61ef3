pub mod check;
pub mod options;
