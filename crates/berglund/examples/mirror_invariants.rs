//! Computes the invariants of a small invertible quasihomogeneous
//! polynomial and a variable permutation, and prints them the way a
//! notebook session would.

use berglund::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let poly = QuasihomogeneousPolynomial::new(vec![
        AtomicBlock::loop_(vec![3, 3])?,
        AtomicBlock::fermat(4)?,
    ])?;

    println!("{poly}");
    println!("{}", poly.w_transpose_string());
    println!();

    println!("exponent matrix:\n{}", poly.exponent_matrix());
    for (i, weight) in poly.weights().iter().enumerate() {
        println!("w_{} = {weight}", i + 1);
    }
    println!();

    println!("symmetry generators (additive):\n{}", poly.cyclotomic_inverse());
    println!(
        "symmetry generators (multiplicative):\n{}",
        poly.cyclotomic_inverse().render(RenderMode::Multiplicative)
    );
    println!();

    let sigma = Permutation::new(vec![vec![1, 2]], Some(3))?;
    println!("sigma = {sigma}");
    println!("{}", sigma.matrix());
    let sigma_inverse = sigma.matrix().unit_inverse(Some(64))?;
    println!("sigma^-1:\n{sigma_inverse}");

    Ok(())
}
