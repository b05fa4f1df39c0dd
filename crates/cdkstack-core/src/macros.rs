//! Helpers for CloudFormation resource bindings.

/// Declare a `Copy` enum whose variants map one to one onto schema literals.
///
/// Each variant gets a serde rename to its literal, and the enum gets an
/// `as_str` returning it plus a `Display` impl writing it. The calling crate
/// must depend on `serde`.
///
/// ```
/// cdkstack_core::cfn_literal_enum! {
///     /// Billing mode of a table.
///     BillingMode {
///         Provisioned => "PROVISIONED",
///         PayPerRequest => "PAY_PER_REQUEST",
///     }
/// }
///
/// assert_eq!(BillingMode::PayPerRequest.to_string(), "PAY_PER_REQUEST");
/// ```
#[macro_export]
macro_rules! cfn_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $literal:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $literal)] $variant, )+
        }

        impl $name {
            /// The literal used in templates.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $literal, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::cfn_literal_enum! {
        Protocol {
            Tcp => "TCP",
            Udp => "UDP",
        }
    }

    #[test]
    fn test_should_use_literal_for_serde_and_display() {
        assert_eq!(serde_json::to_string(&Protocol::Tcp).unwrap(), r#""TCP""#);
        assert_eq!(Protocol::Udp.to_string(), "UDP");
        let parsed: Protocol = serde_json::from_str(r#""UDP""#).unwrap();
        assert_eq!(parsed, Protocol::Udp);
        assert!(serde_json::from_str::<Protocol>(r#""tcp""#).is_err());
    }
}
