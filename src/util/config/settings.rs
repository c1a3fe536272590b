/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{FailResult, YamlRead};

use ::std::env;

/// Environment variable that overrides [`Settings::nancheck`].
///
/// Same meaning as in reference LAPACKE: `0` disables the scan, any other
/// integer enables it.
pub const NANCHECK_VAR: &str = "LAPACKE_NANCHECK";

/// Knobs that change the behavior of the high-level entry points.
///
/// ```yaml
/// nancheck: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Scan input matrices for NaN before handing them to the kernel.
    pub nancheck: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { nancheck: true }
    }
}

impl YamlRead for Settings {}

impl Settings {
    /// Defaults, overridden by the environment.
    pub fn from_env() -> FailResult<Self>
    { Settings::default().with_env_overrides() }

    /// Applies any settings present in the environment on top of `self`.
    pub fn with_env_overrides(self) -> FailResult<Self>
    {Ok({
        let value = match env::var(NANCHECK_VAR) {
            Ok(s) => Some(s),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(s)) => bail!("env var not unicode: {}={:?}", NANCHECK_VAR, s),
        };
        self.with_nancheck_var(value.as_ref().map(|s| &s[..]))?
    })}

    fn with_nancheck_var(mut self, value: Option<&str>) -> FailResult<Self>
    {Ok({
        match value.map(str::trim) {
            None | Some("") => {},
            Some(s) => match s.parse::<i64>() {
                Ok(flag) => self.nancheck = flag != 0,
                Err(_) => bail!("Invalid setting for {}: {:?}", NANCHECK_VAR, s),
            },
        }
        debug!("nancheck = {}", self.nancheck);
        self
    })}
}
