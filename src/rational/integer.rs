use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{PrimInt, Signed};

/// Fixed-width signed integers a `Rational` can be built from.
///
/// Every arithmetic step goes through the checked operations of `PrimInt`,
/// so a result that does not fit is reported instead of wrapped.
pub trait RationalInt: PrimInt + Signed + Debug + Display + Hash {}

impl<T> RationalInt for T where T: PrimInt + Signed + Debug + Display + Hash {}
