// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::ordering::Ordering;

const ARG_MARKER: char = ':';
const RETURN_IN_ORDER_PREFIX: char = '-';
const REQUIRE_ORDER_PREFIX: char = '+';

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it requires or accepts an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument required).
    Nothing,
    /// Option needs an argument.
    Argument,
    /// Option accepts an argument, but only one given in the same
    /// command-line element (`-ofoo` or `--opt=foo`).
    Optional,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Create a new default requirement.
    pub fn new() -> Self {
        Need::default()
    }

    fn from_colons(colons: usize) -> Self {
        match colons {
            0 => Need::Nothing,
            1 => Need::Argument,
            _ => Need::Optional,
        }
    }
}

/// The short option specification, as given to `getopt(3)`.
///
/// Each character is an option name. A character followed by a single
/// colon requires an argument, one followed by two colons accepts an
/// optional argument.
///
/// The string may start with `+` (stop at the first non-option) or `-`
/// (return non-options in order), optionally followed by `:` (report a
/// missing option argument with `:` rather than `?`).
///
/// Parsing never fails: anything that does not make sense (a stray colon,
/// for example) is simply not an option.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OptString {
    raw: String,
    ordering: Option<Ordering>,
    missing_arg_colon: bool,
    rules: Vec<(char, Need)>,
}

impl OptString {
    /// Parse an option string.
    pub fn parse(spec: &str) -> Self {
        let mut rest = spec;

        let ordering = match rest.chars().next() {
            Some(RETURN_IN_ORDER_PREFIX) => Some(Ordering::ReturnInOrder),
            Some(REQUIRE_ORDER_PREFIX) => Some(Ordering::RequireOrder),
            _ => None,
        };

        if ordering.is_some() {
            rest = &rest[1..];
        }

        let raw = rest.to_string();

        let missing_arg_colon = rest.starts_with(ARG_MARKER);

        let mut rules = Vec::<(char, Need)>::new();
        let mut chars = rest.chars().peekable();

        while let Some(c) = chars.next() {
            if c == ARG_MARKER {
                continue;
            }

            let mut colons = 0;

            while chars.peek() == Some(&ARG_MARKER) {
                chars.next();
                colons += 1;
            }

            // First declaration wins, like strchr(3).
            if !rules.iter().any(|(option, _)| *option == c) {
                rules.push((c, Need::from_colons(colons)));
            }
        }

        OptString {
            raw,
            ordering,
            missing_arg_colon,
            rules,
        }
    }

    /// The ordering requested by a leading `+` or `-`, if any.
    pub fn ordering(&self) -> Option<Ordering> {
        self.ordering
    }

    /// Set if the option string (after any ordering prefix) starts with a
    /// colon.
    pub fn missing_arg_colon(&self) -> bool {
        self.missing_arg_colon
    }

    /// The option string without the ordering prefix.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the argument requirement of the specified option, or [None]
    /// if the option is not declared.
    pub fn need(&self, option: char) -> Option<Need> {
        self.rules
            .iter()
            .find(|(c, _)| *c == option)
            .map(|(_, need)| *need)
    }

    /// Determine if the specified option is declared.
    pub fn contains(&self, option: char) -> bool {
        self.need(option).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need() {
        let r1 = Need::new();
        let r2 = Need::default();

        assert_eq!(r1, Need::Nothing);
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_parse() {
        #[derive(Debug)]
        struct TestData<'a> {
            spec: &'a str,
            ordering: Option<Ordering>,
            colon: bool,
            raw: &'a str,
            needs: Vec<(char, Option<Need>)>,
        }

        let tests = &[
            TestData {
                spec: "",
                ordering: None,
                colon: false,
                raw: "",
                needs: vec![('a', None), (':', None)],
            },
            TestData {
                spec: "ab:c::",
                ordering: None,
                colon: false,
                raw: "ab:c::",
                needs: vec![
                    ('a', Some(Need::Nothing)),
                    ('b', Some(Need::Argument)),
                    ('c', Some(Need::Optional)),
                    ('d', None),
                    (':', None),
                ],
            },
            TestData {
                spec: "+a",
                ordering: Some(Ordering::RequireOrder),
                colon: false,
                raw: "a",
                needs: vec![('a', Some(Need::Nothing)), ('+', None)],
            },
            TestData {
                spec: "-a:",
                ordering: Some(Ordering::ReturnInOrder),
                colon: false,
                raw: "a:",
                needs: vec![('a', Some(Need::Argument)), ('-', None)],
            },
            TestData {
                spec: ":a:",
                ordering: None,
                colon: true,
                raw: ":a:",
                needs: vec![('a', Some(Need::Argument))],
            },
            TestData {
                spec: "+:x",
                ordering: Some(Ordering::RequireOrder),
                colon: true,
                raw: ":x",
                needs: vec![('x', Some(Need::Nothing))],
            },
            TestData {
                // Malformed: stray colons are silently ignored.
                spec: "::a:::b",
                ordering: None,
                colon: true,
                raw: "::a:::b",
                needs: vec![
                    ('a', Some(Need::Optional)),
                    ('b', Some(Need::Nothing)),
                    (':', None),
                ],
            },
            TestData {
                // First declaration wins.
                spec: "aa:",
                ordering: None,
                colon: false,
                raw: "aa:",
                needs: vec![('a', Some(Need::Nothing))],
            },
            TestData {
                spec: "人:0",
                ordering: None,
                colon: false,
                raw: "人:0",
                needs: vec![('人', Some(Need::Argument)), ('0', Some(Need::Nothing))],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let spec = OptString::parse(d.spec);

            let msg = format!("{}, spec: {:?}", msg, spec);

            assert_eq!(spec.ordering(), d.ordering, "{}", msg);
            assert_eq!(spec.missing_arg_colon(), d.colon, "{}", msg);
            assert_eq!(spec.raw(), d.raw, "{}", msg);

            for (c, need) in d.needs.iter() {
                assert_eq!(spec.need(*c), *need, "{}, option: {:?}", msg, c);
                assert_eq!(spec.contains(*c), need.is_some(), "{}", msg);
            }
        }
    }
}
