use anyhow::Result;
use sparsepoly::{polynomial_arithmetic, Polynomial};

fn main() -> Result<()> {
    let poly = Polynomial::parse("3 5 4 4 5 3 6 2 1 1 9 0")?;
    println!("p(x)      = {poly}");
    println!("terms     = {}", poly.terms());
    println!("p(1)      = {}", poly.evaluate(1.0));
    println!("p(2)      = {}", poly.evaluate(2.0));
    println!("p'(x)     = {}", poly.derivative()?);
    println!(
        "p + p     = {}",
        polynomial_arithmetic::sum(Some(&poly), Some(&poly))?
    );
    println!(
        "p * p     = {}",
        polynomial_arithmetic::product(Some(&poly), Some(&poly))?
    );
    println!("ascending:\n{}", poly.description());

    let mut edited = Polynomial::copy_of(Some(&poly))?;
    edited.add_term(-4.0, 4)?;
    let removed = edited.delete_term(0);
    println!("edited    = {edited} (removed constant {removed})");
    println!("unchanged = {}", edited.equals(&poly));

    if let Err(err) = Polynomial::parse("3 5 oops 2") {
        println!("rejected  : {err}");
    }
    if let Err(err) = Polynomial::zero().derivative() {
        println!("rejected  : {err}");
    }
    Ok(())
}
