/* ************************************************************************ **
** This file is part of trexc-shim, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Integer-coded enums that come across a C-style API as a plain `int`.
// Decoding is fallible because the caller can pass anything.
macro_rules! c_enums {
    (
        $(
            $(#[$meta:meta])*
            [$($vis:tt)*] enum $Type:ident {
                // tt so it can double as expr and pat
                $($Variant:ident = $value:tt,)+
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #[repr(i32)]
            $($vis)* enum $Type {
                $($Variant = $value,)+
            }

            impl $Type {
                /// Decode a raw code, or `None` if it names no variant.
                pub fn from_int(x: i32) -> Option<$Type>
                { match x {
                    $($value => Some($Type::$Variant),)+
                    _ => None,
                }}
            }
        )+
    };
}
