// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// Every variant is recoverable: it describes the result of a single scan
/// call and the scanner can be called again to carry on with the next
/// option.
///
/// The rendered messages are plain English and do not include the program
/// name; callers wanting a different wording (or a translation) should
/// match on the variant and use [Error::option()].
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// User specified a short option that is not in the option string.
    #[error("invalid option -- '{0}'")]
    UnknownOption(char),

    /// User specified a long option (or a long-only style single dash
    /// option) that does not match any descriptor.
    ///
    /// The value is the full token as given, including the leading dashes
    /// but without any `=value` part.
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// A long option abbreviation matched more than one descriptor.
    #[error(
        "option '{option}' is ambiguous; possibilities: {}",
        .candidates
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<String>>()
            .join(" ")
    )]
    AmbiguousLongOption {
        /// The abbreviation as given (with leading dashes).
        option: String,
        /// The long options that the abbreviation matched (with leading
        /// dashes), in table order.
        candidates: Vec<String>,
    },

    /// Option argument was not specified.
    ///
    /// The value is the option as given (`-c` or `--name`).
    #[error("option '{0}' requires an argument")]
    MissingRequiredArgument(String),

    /// A long option that takes no argument was given one (`--name=value`).
    #[error("option '{0}' doesn't allow an argument")]
    OptionForbidsArgument(String),
}

impl Error {
    /// Returns the text of the option that caused the error, with its
    /// leading dash(es).
    pub fn option(&self) -> String {
        match self {
            Error::UnknownOption(c) => format!("-{}", c),
            Error::UnrecognizedOption(s) => s.clone(),
            Error::AmbiguousLongOption { option, .. } => option.clone(),
            Error::MissingRequiredArgument(s) => s.clone(),
            Error::OptionForbidsArgument(s) => s.clone(),
        }
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
