//! Use cases (application services)

pub mod generate_quote;
