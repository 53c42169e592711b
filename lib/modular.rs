//! Modular T-matrix evolution of anyon state vectors.
//!
//! The T matrix is diagonal in the anyon basis, so acting with it is just an
//! elementwise product with its diagonal.

use std::f64::consts::TAU;
use ndarray as nd;
use num_complex::Complex64 as C64;
use thiserror::Error;
use crate::c;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModularError {
    #[error("modular: state has {0} amplitudes but T has {1} diagonal entries")]
    ShapeMismatch(usize, usize),
}
pub type ModularResult<T> = Result<T, ModularError>;

/// Apply a diagonal T matrix, given by its diagonal `t_diag`, to `state`.
///
/// ```
/// use ndarray::array;
/// use qgf::{ c, modular::apply_t_evolution };
///
/// let state = array![c!(1.0), c!(0.0, 2.0)];
/// let t_diag = array![c!(i 1.0), c!(-1.0)];
/// let evolved = apply_t_evolution(&state, &t_diag).unwrap();
/// assert_eq!(evolved, array![c!(i 1.0), c!(0.0, -2.0)]);
/// ```
pub fn apply_t_evolution<S, T>(
    state: &nd::ArrayBase<S, nd::Ix1>,
    t_diag: &nd::ArrayBase<T, nd::Ix1>,
) -> ModularResult<nd::Array1<C64>>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    if state.len() != t_diag.len() {
        return Err(ModularError::ShapeMismatch(state.len(), t_diag.len()));
    }
    return Ok(t_diag * state);
}

/// Diagonal of the modular T matrix,
/// ```math
/// T_{aa} = \exp\!\left[2 \pi i \left(h_a - \frac{c}{24}\right)\right]
/// ```
/// for topological spins $`h_a`$ and central charge $`c`$.
pub fn t_matrix_diag<S>(spins: &nd::ArrayBase<S, nd::Ix1>, central_charge: f64)
    -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    return spins.mapv(|h| c!(e TAU * (h - central_charge / 24.0)));
}
