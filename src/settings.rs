// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

/// Environment variable that requests strict POSIX behaviour.
pub const POSIXLY_CORRECT_ENV_VAR: &str = "POSIXLY_CORRECT";

/// Settings used to control the scanners behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, behave as POSIX requires: stop at the first non-option
    /// argument (unless the option string says otherwise) and treat
    /// `-o -- foo` (where `-o` requires an argument) as `-o foo` followed
    /// by the end of options.
    posixly_correct: bool,

    /// If set, long options may also be introduced by a single dash
    /// (`-name`), as `getopt_long_only(3)` allows.
    long_only: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// Create a settings object, enabling POSIX mode if the
    /// [POSIXLY_CORRECT_ENV_VAR] environment variable is set.
    ///
    /// # Note
    ///
    /// This is the only place the environment is consulted, and only
    /// when called: the scanner never reads it on its own.
    pub fn from_env() -> Self {
        let settings = Settings::new();

        if env::var_os(POSIXLY_CORRECT_ENV_VAR).is_some() {
            settings.posixly_correct()
        } else {
            settings
        }
    }

    /// Enable strict POSIX behaviour.
    pub fn posixly_correct(self) -> Self {
        Settings {
            posixly_correct: true,
            ..self
        }
    }

    /// Allow long options to be specified with a single dash.
    ///
    /// # Example
    ///
    /// With a `--verbose` long option and no `v` short option, `-verbose`
    /// and `-verb` are both accepted. A valid short option always takes
    /// precedence for a two character argument: if `-v` is a short option,
    /// `-v` means the short option, not an abbreviation of `--verbose`.
    pub fn long_only(self) -> Self {
        Settings {
            long_only: true,
            ..self
        }
    }

    /// Set if POSIX mode is enabled.
    pub fn is_posixly_correct(&self) -> bool {
        self.posixly_correct
    }

    /// Set if long options may be given with a single dash.
    pub fn is_long_only(&self) -> bool {
        self.long_only
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used with [crate::GetOpt::new()]. However, this isn't usually
/// required: just call [crate::GetOpt::from_env()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// Returns the name the program was invoked as.
pub(crate) fn program_name() -> String {
    env::args().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings() {
        let new_settings = Settings::new();
        let def_settings = Settings::default();

        assert!(!new_settings.is_posixly_correct());
        assert!(!new_settings.is_long_only());
        assert_eq!(new_settings, def_settings);

        let settings = Settings::new().posixly_correct().long_only();

        assert!(settings.is_posixly_correct());
        assert!(settings.is_long_only());

        let settings = Settings::new().long_only();

        assert!(!settings.is_posixly_correct());
        assert!(settings.is_long_only());
    }

    #[test]
    fn test_from_env() {
        let expected = env::var_os(POSIXLY_CORRECT_ENV_VAR).is_some();

        let settings = Settings::from_env();

        assert_eq!(settings.is_posixly_correct(), expected);
        assert!(!settings.is_long_only());
    }

    #[test]
    fn test_get_args() {
        let args = get_args();
        let all: Vec<String> = env::args().collect();

        assert_eq!(args.len() + 1, all.len());
        assert_eq!(args[..], all[1..]);
    }
}
