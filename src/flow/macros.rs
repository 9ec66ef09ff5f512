//! Macros for ergonomic flow construction.

/// Generate a `FlowState` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use eventide::flow_state;
/// use eventide::flow::FlowState;
///
/// flow_state! {
///     pub enum JobState {
///         Pending,
///         Running,
///         Done,
///     }
///     final: [Done]
/// }
///
/// assert_eq!(JobState::Pending.name(), "Pending");
/// assert!(JobState::Done.is_final());
/// ```
#[macro_export]
macro_rules! flow_state {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::flow::FlowState for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::flow::FlowState;

    flow_state! {
        enum TestState {
            Waiting,
            Working,
            Done,
        }
        final: [Done]
    }

    #[test]
    fn flow_state_macro_generates_trait() {
        assert_eq!(TestState::Waiting.name(), "Waiting");
        assert!(!TestState::Working.is_final());
        assert!(TestState::Done.is_final());
    }

    #[test]
    fn flow_state_supports_visibility() {
        flow_state! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        let _state = PublicState::A;
    }

    #[test]
    fn flow_state_works_without_final() {
        flow_state! {
            enum LoopingState {
                One,
                Two,
            }
        }

        assert!(!LoopingState::One.is_final());
        assert!(!LoopingState::Two.is_final());
    }
}
