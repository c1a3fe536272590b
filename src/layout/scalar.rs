/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::num_traits::Float;
use ::std::fmt::Debug;

/// A real element type with a LAPACK precision prefix.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// `'s'` or `'d'`, as in `strexc` / `dtrexc`.
    const PREFIX: char;
}

impl Scalar for f32 {
    const PREFIX: char = 's';
}

impl Scalar for f64 {
    const PREFIX: char = 'd';
}
