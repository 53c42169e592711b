//! Provides small helpers shared between the lookup modules.

pub extern crate num_complex;

/// Handy macro to create `num_complex::Complex64`s from more natural and
/// succinct syntax.
///
/// ```
/// use qgf::{ c, utils::num_complex::Complex64 };
/// use std::f64::consts::PI;
///
/// assert_eq!(c!(1.0), Complex64::new(1.0, 0.0));
/// assert_eq!(c!(i 2.0), Complex64::new(0.0, 2.0));
/// assert!((c!(e PI) - c!(-1.0)).norm() < 1e-12);
/// ```
#[macro_export]
macro_rules! c {
    ( $re:expr )
        => { $crate::utils::num_complex::Complex64::new($re, 0.0) };
    ( i $im:expr )
        => { $crate::utils::num_complex::Complex64::new(0.0, $im) };
    ( e $ph:expr )
        => { $crate::utils::num_complex::Complex64::cis($ph) };
    ( $re:expr, $im:expr )
        => { $crate::utils::num_complex::Complex64::new($re, $im) };
    ( $r:expr, e $ph:expr )
        => { $crate::utils::num_complex::Complex64::from_polar($r, $ph) };
}

/// Normalize an anyon label for use as a table key.
///
/// Only surrounding whitespace is removed; case and interior spacing are
/// significant.
pub fn trim_label(label: &str) -> &str { label.trim() }

/// Owned form of [`trim_label`].
pub fn owned_label<S>(label: S) -> String
where S: AsRef<str>
{
    return trim_label(label.as_ref()).to_string();
}
