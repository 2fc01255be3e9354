// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::cell::Cell;
use std::rc::Rc;

use crate::optstring::Need;

const VALUE_SEPARATOR: char = '=';

/// Caller-owned variable that a [LongOpt] writes its value to when it is
/// matched (the `flag` member of `struct option` in `getopt_long(3)`).
///
/// The variable is left untouched if the option is not specified.
pub type FlagSink = Rc<Cell<char>>;

/// Describes a long option (`--name`, `--name=value` or `--name value`).
///
/// # Note
///
/// - All members are public for convenience.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LongOpt {
    /// Long option name, without the leading dashes (required).
    pub name: String,
    /// Type of option (defaults to a flag).
    pub needs: Need,
    /// If set, the variable that [LongOpt::value] is written to when the
    /// option is matched. The scanner then reports [crate::FLAG_SET]
    /// rather than the value.
    pub flag: Option<FlagSink>,
    /// Value reported (or stored in the flag) when the option is matched.
    /// Usually the equivalent short option name.
    pub value: char,
}

impl LongOpt {
    /// Create a new long option descriptor.
    pub fn new(name: &str) -> Self {
        LongOpt {
            name: name.into(),
            ..LongOpt::default()
        }
    }

    /// Specify the requirement for the option.
    pub fn needs(self, needs: Need) -> Self {
        LongOpt { needs, ..self }
    }

    /// Specify the value reported when the option is matched.
    pub fn value(self, value: char) -> Self {
        LongOpt { value, ..self }
    }

    /// Specify a variable to store the value in when the option is matched.
    pub fn flag(self, flag: FlagSink) -> Self {
        LongOpt {
            flag: Some(flag),
            ..self
        }
    }

    /// Two descriptors are aliases if matching either has exactly the
    /// same effect.
    fn is_alias_of(&self, other: &LongOpt) -> bool {
        let same_flag = match (&self.flag, &other.flag) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };

        self.needs == other.needs && self.value == other.value && same_flag
    }
}

/// Outcome of looking a (possibly abbreviated) name up in the long option
/// table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Resolution {
    /// Exact match, or the only abbreviation match: the table index.
    Found(usize),
    /// The abbreviation matched more than one distinct option: the table
    /// indexes of all matches.
    Ambiguous(Vec<usize>),
    /// No match at all.
    NotFound,
}

/// Split `name=value` into the name and inline value. A trailing `=`
/// gives an empty value.
pub(crate) fn split_inline(remainder: &str) -> (&str, Option<&str>) {
    match remainder.find(VALUE_SEPARATOR) {
        Some(pos) => (&remainder[..pos], Some(&remainder[pos + 1..])),
        None => (remainder, None),
    }
}

/// Look up `name` in the table.
///
/// An exact match always wins. Otherwise the name must be a prefix of
/// exactly one option (or of several aliases for the same option). In
/// long-only mode any second prefix match is ambiguous.
pub(crate) fn resolve(opts: &[LongOpt], name: &str, long_only: bool) -> Resolution {
    let mut found: Option<usize> = None;
    let mut ambiguous: Vec<usize> = Vec::new();

    for (i, opt) in opts.iter().enumerate() {
        if !opt.name.starts_with(name) {
            continue;
        }

        if opt.name == name {
            return Resolution::Found(i);
        }

        match found {
            None => found = Some(i),
            Some(first) => {
                if long_only || !opt.is_alias_of(&opts[first]) {
                    if ambiguous.is_empty() {
                        ambiguous.push(first);
                    }

                    ambiguous.push(i);
                }
            }
        }
    }

    if !ambiguous.is_empty() {
        return Resolution::Ambiguous(ambiguous);
    }

    match found {
        Some(i) => Resolution::Found(i),
        None => Resolution::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_opt() {
        let default_opt = LongOpt::default();

        let expected_default = LongOpt {
            name: "".into(),
            needs: Need::Nothing,
            flag: None,
            value: '\u{0}',
        };

        assert_eq!(default_opt, expected_default);

        let sink = FlagSink::default();

        let opt = LongOpt::new("verbose")
            .needs(Need::Optional)
            .value('v')
            .flag(sink.clone());

        assert_eq!(opt.name, "verbose");
        assert_eq!(opt.needs, Need::Optional);
        assert_eq!(opt.value, 'v');
        assert!(Rc::ptr_eq(opt.flag.as_ref().unwrap(), &sink));
    }

    #[test]
    fn test_split_inline() {
        let tests = &[
            ("foo", ("foo", None)),
            ("foo=bar", ("foo", Some("bar"))),
            ("foo=", ("foo", Some(""))),
            ("foo=bar=baz", ("foo", Some("bar=baz"))),
            ("=bar", ("", Some("bar"))),
            ("", ("", None)),
        ];

        for (i, (remainder, result)) in tests.iter().enumerate() {
            let msg = format!("test[{}]: remainder: {:?}", i, remainder);

            assert_eq!(split_inline(remainder), *result, "{}", msg);
        }
    }

    #[test]
    fn test_resolve() {
        #[derive(Debug)]
        struct TestData<'a> {
            opts: Vec<LongOpt>,
            name: &'a str,
            long_only: bool,
            result: Resolution,
        }

        let foo = LongOpt::new("foo").value('f');
        let foobar = LongOpt::new("foobar").value('b');
        let foobaz = LongOpt::new("foobaz").value('z');

        // Same effect as "color".
        let color = LongOpt::new("color").needs(Need::Optional).value('c');
        let colour = LongOpt::new("colour").needs(Need::Optional).value('c');

        let sink_1 = FlagSink::default();
        let sink_2 = FlagSink::default();

        let tests = &[
            TestData {
                opts: vec![],
                name: "foo",
                long_only: false,
                result: Resolution::NotFound,
            },
            TestData {
                opts: vec![foo.clone(), foobar.clone()],
                name: "foo",
                long_only: false,
                result: Resolution::Found(0),
            },
            TestData {
                // Exact match wins even when it appears after abbreviations.
                opts: vec![foobar.clone(), foobaz.clone(), foo.clone()],
                name: "foo",
                long_only: false,
                result: Resolution::Found(2),
            },
            TestData {
                opts: vec![foo.clone(), foobar.clone()],
                name: "foob",
                long_only: false,
                result: Resolution::Found(1),
            },
            TestData {
                opts: vec![foobar.clone(), foobaz.clone()],
                name: "fooba",
                long_only: false,
                result: Resolution::Ambiguous(vec![0, 1]),
            },
            TestData {
                opts: vec![foo.clone(), foobar.clone(), foobaz.clone()],
                name: "f",
                long_only: false,
                result: Resolution::Ambiguous(vec![0, 1, 2]),
            },
            TestData {
                opts: vec![foobar.clone(), foobaz.clone()],
                name: "foobaz",
                long_only: false,
                result: Resolution::Found(1),
            },
            TestData {
                opts: vec![foobar.clone(), foobaz.clone()],
                name: "foobarx",
                long_only: false,
                result: Resolution::NotFound,
            },
            TestData {
                // Aliases are not ambiguous.
                opts: vec![color.clone(), colour.clone()],
                name: "col",
                long_only: false,
                result: Resolution::Found(0),
            },
            TestData {
                // ... unless in long-only mode.
                opts: vec![color.clone(), colour.clone()],
                name: "col",
                long_only: true,
                result: Resolution::Ambiguous(vec![0, 1]),
            },
            TestData {
                // Different flag variables make the options distinct.
                opts: vec![
                    LongOpt::new("quiet").value('\u{1}').flag(sink_1.clone()),
                    LongOpt::new("quit").value('\u{1}').flag(sink_2.clone()),
                ],
                name: "qu",
                long_only: false,
                result: Resolution::Ambiguous(vec![0, 1]),
            },
            TestData {
                opts: vec![
                    LongOpt::new("quiet").value('\u{1}').flag(sink_1.clone()),
                    LongOpt::new("quit").value('\u{1}').flag(sink_1.clone()),
                ],
                name: "qu",
                long_only: false,
                result: Resolution::Found(0),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = resolve(&d.opts, d.name, d.long_only);

            assert_eq!(result, d.result, "{}", msg);
        }
    }
}
