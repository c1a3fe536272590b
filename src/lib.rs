/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Row- and column-major front end for `?trexc`.
//!
//! The pieces live in member crates and are re-exported here:
//!
//! * [`layout`]: storage orders, the transpose utility, NaN scan.
//! * [`config`]: YAML/environment settings.
//! * everything else: the adapter itself (`Shim`) and its collaborators.

#[macro_use] extern crate log;
extern crate failure;

pub extern crate trexc_shim_layout as layout;
pub extern crate trexc_shim_config as config;
extern crate trexc_shim_lapacke;

pub use trexc_shim_lapacke::*;
pub use layout::{Layout, Scalar, LAPACK_ROW_MAJOR, LAPACK_COL_MAJOR};
pub use config::{Settings, YamlRead};

pub type FailResult<T> = Result<T, failure::Error>;

/// A shim around `kernel` whose settings come from the environment
/// (see [`config::NANCHECK_VAR`]).
pub fn shim_from_env<K>(kernel: K) -> FailResult<Shim<K>>
{Ok({
    let settings = Settings::from_env()?;
    debug!("trexc-shim settings: {:?}", settings);
    Shim::new(kernel).with_settings(settings)
})}
