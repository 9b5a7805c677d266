//! Operator test modules kept out of the implementation files.

mod operators_tests;
mod unary_operators_tests;
