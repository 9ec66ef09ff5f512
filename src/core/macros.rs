//! Macros for declaring closed event families.

/// Generate an event payload enum, its kind enum, and both trait impls.
///
/// Variants may be unit variants or tuple variants carrying payload data.
/// The generated kind enum has the same variant names, is fieldless, and
/// derives serde support for logging and diagnostics.
///
/// # Example
///
/// ```
/// use eventide::event_enum;
/// use eventide::core::{Event, EventKind};
///
/// event_enum! {
///     pub enum DoorEvent {
///         Open,
///         Close,
///         Knock(String),
///     }
///     kinds: DoorKind
/// }
///
/// let event = DoorEvent::Knock("hello".to_string());
/// assert_eq!(event.kind(), DoorKind::Knock);
/// assert_eq!(DoorKind::Knock.name(), "Knock");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $($field:ty),* $(,)? ) )?
            ),* $(,)?
        }

        kinds: $kind:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $($field),* ) )?
            ),*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::EventKind for $kind {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }
        }
    };
}
