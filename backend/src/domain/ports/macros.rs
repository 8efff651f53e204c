//! `define_port_error!`: adapter failure enums whose variants each carry a
//! free-form `message` behind a fixed summary.
//!
//! ```text
//! define_port_error! {
//!     pub enum StoreError {
//!         Offline => "store offline",
//!     }
//! }
//! // StoreError::offline("pool exhausted").to_string()
//! //   == "store offline: pool exhausted"
//! ```

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $summary:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{}: {}", $summary, .message)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build a `" $variant "` failure with adapter detail."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
