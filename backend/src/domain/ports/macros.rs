//! `define_port_error!` generates the error enums returned by driven ports.
//!
//! Every variant carries named fields. Each gets a `thiserror` message and a
//! snake_case constructor taking `impl Into<_>` for each field, so adapters
//! can pass `&str` where the variant stores a `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::ports::UserPersistenceError;
    use rstest::rstest;

    #[rstest]
    fn constructors_convert_borrowed_and_owned_messages() {
        let borrowed = UserPersistenceError::query("timeout");
        let owned = UserPersistenceError::query(String::from("timeout"));
        assert_eq!(borrowed, owned);
        assert_eq!(
            borrowed,
            UserPersistenceError::Query {
                message: "timeout".to_owned()
            }
        );
    }

    #[rstest]
    fn constructors_pick_the_matching_variant() {
        assert!(matches!(
            UserPersistenceError::connection("refused"),
            UserPersistenceError::Connection { .. }
        ));
        assert_ne!(
            UserPersistenceError::connection("x"),
            UserPersistenceError::query("x")
        );
    }
}
