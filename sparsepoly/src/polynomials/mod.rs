mod parse;
pub mod polynomial_arithmetic;
mod polynomial;
mod render;
mod term;

pub use polynomial::Polynomial;
pub use term::Term;


#[cfg(test)]
mod proptests;
