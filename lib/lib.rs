#![allow(non_snake_case)]
#![allow(clippy::needless_return)]

//! This crate is a collection of small numerical helpers for toy calculations
//! around anyon models: fusion-rule and F-symbol lookups, entropic
//! renormalization-group flow, modular T-evolution, and quantum-dimension
//! path weights.
//!
//! Nothing here holds state. Every table is built by the caller and passed in
//! by reference.

pub mod error;
pub mod utils;
pub mod fusion;
pub mod fsymbol;
pub mod rg;
pub mod modular;
pub mod yukawa;

