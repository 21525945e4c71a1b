//! Macros for declaring state enums.

/// Declare a fieldless enum and derive its `State` implementation.
///
/// Variant names double as state names. Extra derives go in the
/// attribute list.
///
/// # Example
///
/// ```
/// use pocket_calc::state_enum;
/// use pocket_calc::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Entry {
///         Typing,
///         Shown,
///         Overflow,
///     }
///     final: [Shown, Overflow]
///     error: [Overflow]
/// }
///
/// assert_eq!(Entry::Typing.name(), "Typing");
/// assert!(Entry::Overflow.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        #[derive(Copy, Eq)]
        enum Lamp {
            Off,
            On,
            Burnt,
        }
        final: [Burnt]
        error: [Burnt]
    }

    state_enum! {
        enum Plain {
            Only,
        }
    }

    #[test]
    fn names_follow_variants() {
        assert_eq!(Lamp::Off.name(), "Off");
        assert_eq!(Lamp::On.name(), "On");
        assert_eq!(Lamp::Burnt.name(), "Burnt");
    }

    #[test]
    fn final_and_error_lists_apply() {
        assert!(!Lamp::On.is_final());
        assert!(Lamp::Burnt.is_final());
        assert!(Lamp::Burnt.is_error());
        assert!(!Lamp::Off.is_error());
    }

    #[test]
    fn lists_are_optional() {
        assert!(!Plain::Only.is_final());
        assert!(!Plain::Only.is_error());
    }

    #[test]
    fn extra_derives_are_applied() {
        let lamp = Lamp::On;
        let copy = lamp;
        assert_eq!(lamp, copy);
    }
}
