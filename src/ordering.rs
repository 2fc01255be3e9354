// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// Describes how to deal with non-option arguments ("positional
/// arguments") that appear among the options.
///
/// See `getopt(3)`.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Ordering {
    /// Stop scanning at the first non-option argument. Everything from
    /// there on is left untouched for the caller.
    ///
    /// Selected with a leading `+` in the option string, or by POSIX mode.
    RequireOrder,

    /// Skip non-option arguments and move them to the end of the argument
    /// vector as scanning proceeds, so that options may be given in any
    /// order relative to positional arguments.
    ///
    /// This is the default.
    Permute,

    /// Report every non-option argument as if it were the argument of an
    /// option with character code `1` ([crate::NON_OPTION]), keeping the
    /// original order.
    ///
    /// Selected with a leading `-` in the option string.
    ReturnInOrder,
}

impl Default for Ordering {
    fn default() -> Self {
        Ordering::Permute
    }
}

impl Ordering {
    /// Pick the ordering: an explicit override from the option string
    /// always wins, then POSIX mode, then the default.
    pub fn select(prefix: Option<Ordering>, posixly_correct: bool) -> Self {
        match prefix {
            Some(ordering) => ordering,
            None if posixly_correct => Ordering::RequireOrder,
            None => Ordering::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        #[derive(Debug)]
        struct TestData {
            prefix: Option<Ordering>,
            posixly_correct: bool,
            result: Ordering,
        }

        let tests = &[
            TestData {
                prefix: None,
                posixly_correct: false,
                result: Ordering::Permute,
            },
            TestData {
                prefix: None,
                posixly_correct: true,
                result: Ordering::RequireOrder,
            },
            TestData {
                prefix: Some(Ordering::ReturnInOrder),
                posixly_correct: true,
                result: Ordering::ReturnInOrder,
            },
            TestData {
                prefix: Some(Ordering::RequireOrder),
                posixly_correct: false,
                result: Ordering::RequireOrder,
            },
            TestData {
                prefix: Some(Ordering::Permute),
                posixly_correct: true,
                result: Ordering::Permute,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = Ordering::select(d.prefix, d.posixly_correct);

            assert_eq!(result, d.result, "{}", msg);
        }

        assert_eq!(Ordering::default(), Ordering::Permute);
    }
}
