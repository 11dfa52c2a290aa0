//! Macro for implementing Display and FromStr for configuration choice enums
//!
//! Deployment switches such as the tab policy or the row stamping variant are
//! read from environment variables as short keywords. This macro maps each
//! unit variant to its keyword in both directions. Parsing trims surrounding
//! whitespace and ignores case.
//!
//! # Example
//!
//! ```rust
//! use eventreg_domain::impl_config_choice_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum LogFormat {
//!     Pretty,
//!     Json,
//! }
//!
//! impl_config_choice_conversions!(LogFormat {
//!     Pretty => "pretty",
//!     Json => "json",
//! });
//!
//! assert_eq!(" JSON ".parse::<LogFormat>(), Ok(LogFormat::Json));
//! assert_eq!(LogFormat::Pretty.to_string(), "pretty");
//! ```

/// Implements Display and FromStr for keyword-backed configuration enums.
///
/// The generated `FromStr` error is a message naming the enum, the rejected
/// input and the accepted keywords.
#[macro_export]
macro_rules! impl_config_choice_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!(
                        "Invalid {}: {:?} (expected one of: {})",
                        stringify!($enum_name),
                        s,
                        [$($str),+].join(", ")
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Server,
        Client,
    }

    impl_config_choice_conversions!(Mode {
        Server => "server",
        Client => "client",
    });

    #[test]
    fn displays_keyword() {
        assert_eq!(Mode::Server.to_string(), "server");
        assert_eq!(Mode::Client.to_string(), "client");
    }

    #[test]
    fn parses_ignoring_case_and_whitespace() {
        assert_eq!(Mode::from_str("server").unwrap(), Mode::Server);
        assert_eq!(Mode::from_str("  CLIENT\n").unwrap(), Mode::Client);
    }

    #[test]
    fn rejection_lists_accepted_keywords() {
        let err = Mode::from_str("browser").unwrap_err();
        assert!(err.contains("Invalid Mode"));
        assert!(err.contains("server, client"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(Mode::from_str("").is_err());
    }
}
