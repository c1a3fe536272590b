/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use ::serde_yaml::Value;
use ::std::io::Read;

/// `serde_yaml::from_reader`, except that unrecognized keys are logged
/// as warnings instead of being silently dropped.
pub trait YamlRead: for<'de> ::serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> FailResult<Self> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Self::from_yaml_str(&s)
    }

    fn from_yaml_str(s: &str) -> FailResult<Self> {
        // an empty document means "all defaults"
        if s.trim().is_empty() {
            return Self::from_yaml_str("{}");
        }
        let value: Value = serde_yaml::from_str(s)?;
        let value = match value {
            Value::Null => Value::Mapping(Default::default()),
            value => value,
        };

        let result = ::serde_ignored::deserialize(
            value,
            |path| warn!("Unused config item (possible typo?): {}", path),
        );
        match result {
            Ok(out) => Ok(out),
            // Going through Value loses the location info in the error.
            // Parse again straight from the text for a message worth reading.
            Err(_) => serde_yaml::from_str(s).map_err(Into::into),
        }
    }
}
