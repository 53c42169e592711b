//! Fieldless error enums for lookups that can fail in a fixed number of ways.
//!
//! [`mkerr!`] declares the enum; [`ErrMsg`] exposes the bare message and the
//! module that raised it. `Display` renders both as `<scope>: <message>`,
//! the same shape as the `thiserror` errors elsewhere in the crate. Errors
//! that need to carry data are derived with `thiserror` in their own modules.

/// Constant message and origin of an error value.
pub trait ErrMsg {
    /// Short name of the module raising the error, e.g. `"fsymbol"`.
    fn scope(&self) -> &'static str;

    fn msg(&self) -> &'static str;
}

/// Declare a fieldless error enum tagged with a scope, and implement
/// `ErrMsg`, `Display`, and `Error` for it.
///
/// ```
/// use qgf::{ mkerr, error::ErrMsg };
///
/// mkerr!(
///     TableError ("table") : {
///         Empty => "table has no rows",
///     }
/// );
/// assert_eq!(TableError::Empty.msg(), "table has no rows");
/// assert_eq!(TableError::Empty.to_string(), "table: table has no rows");
/// ```
#[macro_export]
macro_rules! mkerr {
    (
        $name:ident ( $scope:literal ) :
        { $( $var:ident => $msg:literal ),+ $(,)? }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $( $var, )+
        }

        impl $crate::error::ErrMsg for $name {
            fn scope(&self) -> &'static str { $scope }

            fn msg(&self) -> &'static str {
                return match *self {
                    $( $name::$var => $msg, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                use $crate::error::ErrMsg;
                return write!(f, "{}: {}", self.scope(), self.msg());
            }
        }

        impl std::error::Error for $name { }
    }
}
