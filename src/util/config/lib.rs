/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate failure;
#[macro_use] extern crate serde;
#[macro_use] extern crate log;

pub use self::yaml::YamlRead;
mod yaml;

pub use self::settings::{Settings, NANCHECK_VAR};
mod settings;

pub type FailResult<T> = Result<T, failure::Error>;
