//! Helper macro for declaring repository port error enums.

/// Declare a port error enum with a `thiserror` message per variant and a
/// snake_case constructor for each variant.
///
/// Struct variants get constructors taking `impl Into<T>` per field; unit
/// variants get zero-argument constructors.
macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field: $ty),* } )?,
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build a `" $variant "` error."]
                    pub fn [<$variant:snake>]($($($field: impl Into<$ty>),*)?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Connection { message: String } => "connection failed: {message}",
            Gone => "record vanished",
            Limited { message: String, retries: u8 } => "{message} after {retries} retries",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::connection("refused");
        assert_eq!(err.to_string(), "connection failed: refused");
    }

    #[test]
    fn unit_variants_take_no_arguments() {
        assert_eq!(SamplePortError::gone(), SamplePortError::Gone);
        assert_eq!(SamplePortError::gone().to_string(), "record vanished");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::limited("busy", 3_u8);
        assert_eq!(err.to_string(), "busy after 3 retries");
    }
}
