pub mod aggregate;
pub mod driver;
pub mod errors;
pub mod grouping;
pub mod input;
pub mod output;
