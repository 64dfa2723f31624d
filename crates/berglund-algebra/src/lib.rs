//! # berglund-algebra
//!
//! Scalar layer for the berglund workspace.
//!
//! This crate provides:
//! - Roots of unity as normalized rational exponents (`CyclotomicElement`)
//! - The closed cell algebra over integers, rationals, and roots of unity
//!   (`AlgebraicCell`)
//!
//! All arithmetic is exact: integers and rationals are arbitrary precision
//! via `dashu`, and cyclotomic values are reduced fractions of a full turn.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod cyclotomic;

#[cfg(test)]
mod proptests;

pub use cell::{AlgebraicCell, CellError};
pub use cyclotomic::{CyclotomicElement, RenderMode};
