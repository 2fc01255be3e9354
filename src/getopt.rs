// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::long::{resolve, split_inline, LongOpt, Resolution};
use crate::optstring::{Need, OptString};
use crate::ordering::Ordering;
use crate::permute::{is_non_option, NonOptions};
use crate::settings::{get_args, program_name, Settings};

const OPT_PREFIX: &str = "-";

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";
const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;

/// Option code reported for a non-option argument when the ordering is
/// [Ordering::ReturnInOrder]. The argument itself is the option value.
pub const NON_OPTION: char = '\u{1}';

/// Option code reported when a [LongOpt] with a flag variable is matched.
pub const FLAG_SET: char = '\u{0}';

/// Option code returned by [GetOpt::getopt()] for every error, except a
/// missing option argument when the option string starts with a colon.
pub const UNKNOWN_OPTION: char = '?';

/// Option code returned by [GetOpt::getopt()] for a missing option
/// argument when the option string starts with a colon.
pub const MISSING_ARGUMENT: char = ':';

/// A single scan result: an option found on the command-line.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Opt {
    /// The option name for a short option, the [LongOpt::value] for a long
    /// option, [FLAG_SET] for a long option with a flag variable, or
    /// [NON_OPTION] for a non-option argument.
    pub option: char,

    /// The option argument, if any.
    ///
    /// # Notes
    ///
    /// - This is equivalent to `getopt(3)`'s `optarg` value.
    /// - This is [None] for flags and for options with an optional
    ///   argument that was not given.
    pub value: Option<String>,

    /// Index into the long option table of the matched option. Only set
    /// for long options.
    pub long_index: Option<usize>,
}

impl Opt {
    /// Create a new result for the specified option.
    pub fn new(option: char) -> Self {
        Opt {
            option,
            ..Opt::default()
        }
    }

    /// Specify the option argument.
    pub fn value(self, value: &str) -> Self {
        Opt {
            value: Some(value.into()),
            ..self
        }
    }

    /// Specify the long option table index.
    pub fn long_index(self, index: usize) -> Self {
        Opt {
            long_index: Some(index),
            ..self
        }
    }
}

/// Where the scan loop is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// The next call must look at `argv[optind]`.
    NeedElement,
    /// Part way through the short options of `argv[optind]`: the bytes
    /// from `offset` on are still to be decoded.
    InElement { offset: usize },
    /// Scanning has finished.
    Terminated,
}

impl Default for State {
    fn default() -> Self {
        State::NeedElement
    }
}

/// What handling a new element led to.
#[derive(Debug)]
enum Step {
    /// A non-option argument reported in order.
    Hit(Opt),
    /// An option element: decode from the specified offset.
    Decode(usize),
    /// End of options.
    Stop,
}

/// Everything fixed at construction time.
#[derive(Clone, Debug, Default)]
struct Rules {
    spec: OptString,
    long_opts: Vec<LongOpt>,
    settings: Settings,
    ordering: Ordering,
}

impl Rules {
    fn long_only(&self) -> bool {
        self.settings.is_long_only()
    }
}

/// The scan position and the details of the last result.
#[derive(Clone, Debug, Default)]
struct Cursor {
    /// Index of the element being scanned (`getopt(3)`'s `optind`).
    optind: usize,
    state: State,
    skipped: NonOptions,

    optarg: Option<String>,
    optopt: char,
    longind: Option<usize>,
    last_error: Option<Error>,
}

impl Cursor {
    /// Run the state machine until it produces a result.
    fn scan(&mut self, rules: &Rules, argv: &mut [String]) -> Option<Result<Opt>> {
        loop {
            match self.state {
                State::Terminated => return None,
                State::NeedElement => match self.need_element(rules, argv) {
                    Step::Hit(opt) => return Some(Ok(opt)),
                    Step::Decode(offset) => {
                        if let Some(result) = self.start_element(rules, argv, offset) {
                            return Some(result);
                        }
                    }
                    Step::Stop => {
                        debug!("end of options, optind: {}", self.optind);
                        self.state = State::Terminated;
                    }
                },
                State::InElement { offset } => {
                    if let Some(result) = self.short_option(rules, argv, offset) {
                        return Some(result);
                    }
                }
            }
        }
    }

    /// Move to the next option element, dealing with non-options according
    /// to the ordering.
    fn need_element(&mut self, rules: &Rules, argv: &mut [String]) -> Step {
        let argc = argv.len();

        if rules.ordering == Ordering::Permute {
            // If options followed skipped non-options, move the options
            // first.
            self.skipped.relocate(argv, self.optind);

            while self.optind < argc && is_non_option(&argv[self.optind]) {
                self.optind += 1;
            }

            self.skipped.last = self.optind;
        }

        // Skip "--" as though it were an option (so it moves in front of any
        // skipped non-options), then treat everything after it as a
        // non-option.
        if self.optind < argc && argv[self.optind] == END_OF_OPTIONS {
            self.optind += 1;

            self.skipped.relocate(argv, self.optind);

            self.skipped.last = argc;
            self.optind = argc;
        }

        if self.optind == argc {
            // Point the caller at the non-options.
            if !self.skipped.is_empty() {
                self.optind = self.skipped.first;
            }

            return Step::Stop;
        }

        let arg = &argv[self.optind];

        if is_non_option(arg) {
            if rules.ordering == Ordering::RequireOrder {
                return Step::Stop;
            }

            let opt = Opt::new(NON_OPTION).value(arg);
            self.optind += 1;

            return Step::Hit(opt);
        }

        if arg.starts_with(LONG_OPT_PREFIX) {
            Step::Decode(LONG_OPT_PREFIX.len())
        } else {
            Step::Decode(OPT_PREFIX.len())
        }
    }

    /// Decide whether the element at `optind` is a long option or a group
    /// of short options, and handle the first of them.
    fn start_element(
        &mut self,
        rules: &Rules,
        argv: &[String],
        offset: usize,
    ) -> Option<Result<Opt>> {
        let arg = &argv[self.optind];

        let try_long = if offset == LONG_OPT_PREFIX.len() {
            true
        } else if rules.long_only() && !rules.long_opts.is_empty() {
            // "-f", where 'f' is a valid short option, is that option and
            // not an abbreviation of a long option starting with 'f'.
            let mut chars = arg[offset..].chars();
            let first = chars.next();

            chars.next().is_some() || first.map_or(true, |c| !rules.spec.contains(c))
        } else {
            false
        };

        if try_long {
            if let Some(result) = self.long_option(rules, argv, offset) {
                return Some(result);
            }
        }

        self.short_option(rules, argv, offset)
    }

    /// Handle a long option. Returns [None] if the element is not a long
    /// option but could be a group of short options (long-only mode).
    fn long_option(
        &mut self,
        rules: &Rules,
        argv: &[String],
        offset: usize,
    ) -> Option<Result<Opt>> {
        let argc = argv.len();
        let arg = &argv[self.optind];

        let dashes = &arg[..offset];
        let (name, inline) = split_inline(&arg[offset..]);

        let index = match resolve(&rules.long_opts, name, rules.long_only()) {
            Resolution::Found(index) => index,
            Resolution::Ambiguous(indexes) => {
                self.optind += 1;
                self.optopt = FLAG_SET;

                let candidates = indexes
                    .iter()
                    .map(|i| format!("{}{}", dashes, rules.long_opts[*i].name))
                    .collect();

                return Some(Err(Error::AmbiguousLongOption {
                    option: format!("{}{}", dashes, name),
                    candidates,
                }));
            }
            Resolution::NotFound => {
                let could_be_short = rules.long_only()
                    && offset == OPT_PREFIX.len()
                    && arg[offset..]
                        .chars()
                        .next()
                        .map_or(false, |c| rules.spec.contains(c));

                if could_be_short {
                    return None;
                }

                self.optind += 1;
                self.optopt = FLAG_SET;

                return Some(Err(Error::UnrecognizedOption(format!(
                    "{}{}",
                    dashes, name
                ))));
            }
        };

        let long_opt = &rules.long_opts[index];
        let option_text = format!("{}{}", dashes, long_opt.name);

        self.optind += 1;

        let value = match (long_opt.needs, inline) {
            (Need::Nothing, Some(_)) => {
                self.optopt = long_opt.value;
                return Some(Err(Error::OptionForbidsArgument(option_text)));
            }
            (_, Some(value)) => Some(value.to_string()),
            (Need::Argument, None) => {
                if self.optind == argc {
                    self.optopt = long_opt.value;
                    return Some(Err(Error::MissingRequiredArgument(option_text)));
                }

                let value = argv[self.optind].clone();
                self.optind += 1;

                Some(value)
            }
            (_, None) => None,
        };

        let option = match &long_opt.flag {
            Some(flag) => {
                flag.set(long_opt.value);
                FLAG_SET
            }
            None => long_opt.value,
        };

        self.longind = Some(index);

        Some(Ok(Opt {
            option,
            value,
            long_index: Some(index),
        }))
    }

    /// Handle the next short option in the element at `optind`, starting at
    /// byte `offset`. Returns [None] (having moved to the next element) if
    /// there is nothing left to decode.
    fn short_option(
        &mut self,
        rules: &Rules,
        argv: &[String],
        offset: usize,
    ) -> Option<Result<Opt>> {
        let argc = argv.len();
        let arg = &argv[self.optind];

        let c = match arg[offset..].chars().next() {
            Some(c) => c,
            None => {
                self.optind += 1;
                self.state = State::NeedElement;
                return None;
            }
        };

        let rest_offset = offset + c.len_utf8();
        let rest = &arg[rest_offset..];

        // Move past the element once its last character has been taken.
        if rest.is_empty() {
            self.optind += 1;
            self.state = State::NeedElement;
        } else {
            self.state = State::InElement {
                offset: rest_offset,
            };
        }

        let need = match rules.spec.need(c) {
            Some(need) => need,
            None => {
                self.optopt = c;
                return Some(Err(Error::UnknownOption(c)));
            }
        };

        let value = match need {
            Need::Nothing => None,
            Need::Optional => {
                let value = if rest.is_empty() {
                    None
                } else {
                    self.optind += 1;
                    Some(rest.to_string())
                };

                self.state = State::NeedElement;

                value
            }
            Need::Argument => {
                self.state = State::NeedElement;

                if !rest.is_empty() {
                    self.optind += 1;
                    Some(rest.to_string())
                } else if self.optind == argc {
                    self.optopt = c;
                    return Some(Err(Error::MissingRequiredArgument(format!(
                        "{}{}",
                        OPT_PREFIX, c
                    ))));
                } else {
                    let value = argv[self.optind].clone();
                    self.optind += 1;

                    if rules.settings.is_posixly_correct() && value == END_OF_OPTIONS {
                        return Some(self.posix_end_of_options(argv, c));
                    }

                    Some(value)
                }
            }
        };

        Some(Ok(Opt {
            option: c,
            value,
            long_index: None,
        }))
    }

    /// POSIX says `-o -- foo` (where `-o` requires an argument) means `-o`
    /// with argument `foo`, and that options end there.
    fn posix_end_of_options(&mut self, argv: &[String], c: char) -> Result<Opt> {
        let argc = argv.len();

        if self.optind == argc {
            self.optopt = c;
            return Err(Error::MissingRequiredArgument(format!(
                "{}{}",
                OPT_PREFIX, c
            )));
        }

        let value = argv[self.optind].clone();
        self.optind += 1;

        self.skipped = NonOptions {
            first: self.optind,
            last: argc,
        };

        self.state = State::Terminated;

        debug!("end of options after '{}' argument, optind: {}", c, self.optind);

        Ok(Opt::new(c).value(&value))
    }
}

/// The option scanner.
///
/// Each call to [GetOpt::next_opt()] (or [Iterator::next()], or
/// [GetOpt::getopt()]) returns the next option found in the argument
/// vector, until the end of the options is reached.
///
/// The scanner owns the argument vector: with the default
/// [Ordering::Permute], non-option arguments are moved after the options
/// as scanning proceeds. Once scanning has finished, the non-option
/// arguments are available from [GetOpt::remaining()].
#[derive(Clone, Debug, Default)]
pub struct GetOpt {
    name: String,
    argv: Vec<String>,
    rules: Rules,
    cursor: Cursor,
}

impl GetOpt {
    /// Create a new scanner.
    ///
    /// # Arguments
    ///
    /// - `name`: The program name (for the caller's diagnostics only).
    /// - `args`: The arguments to scan, _without_ the program name.
    /// - `optstring`: The short option specification (see `getopt(3)`).
    pub fn new(name: &str, args: Vec<String>, optstring: &str) -> Self {
        let spec = OptString::parse(optstring);
        let settings = Settings::default();
        let ordering = Ordering::select(spec.ordering(), settings.is_posixly_correct());

        GetOpt {
            name: name.into(),
            argv: args,
            rules: Rules {
                spec,
                long_opts: Vec::new(),
                settings,
                ordering,
            },
            cursor: Cursor::default(),
        }
    }

    /// Create a new scanner for the program's own command-line, honouring
    /// the `POSIXLY_CORRECT` environment variable.
    pub fn from_env(optstring: &str) -> Self {
        GetOpt::new(&program_name(), get_args(), optstring).settings(Settings::from_env())
    }

    /// Specify the long options (see `getopt_long(3)`).
    pub fn long_opts(self, long_opts: Vec<LongOpt>) -> Self {
        GetOpt {
            rules: Rules {
                long_opts,
                ..self.rules
            },
            ..self
        }
    }

    /// Specify any settings for the scanner.
    pub fn settings(self, settings: Settings) -> Self {
        let ordering = Ordering::select(self.rules.spec.ordering(), settings.is_posixly_correct());

        GetOpt {
            rules: Rules {
                settings,
                ordering,
                ..self.rules
            },
            ..self
        }
    }

    /// Return the next option.
    ///
    /// # Return value
    ///
    /// - `Some(Ok(opt))` for an option (or a non-option argument with
    ///   [Ordering::ReturnInOrder]).
    /// - `Some(Err(error))` if the command-line is invalid. The error only
    ///   concerns the current option: calling again carries on with the
    ///   next one.
    /// - [None] once the end of the options has been reached, and on every
    ///   call after that.
    pub fn next_opt(&mut self) -> Option<Result<Opt>> {
        let GetOpt {
            name,
            argv,
            rules,
            cursor,
        } = self;

        cursor.optarg = None;
        cursor.longind = None;
        cursor.last_error = None;

        let result = cursor.scan(rules, argv);

        match &result {
            Some(Ok(opt)) => {
                trace!("{}: option: {:?}, optind: {}", name, opt, cursor.optind);
                cursor.optarg = opt.value.clone();
            }
            Some(Err(error)) => {
                debug!("{}: {}, optind: {}", name, error, cursor.optind);
                cursor.last_error = Some(error.clone());
            }
            None => (),
        }

        result
    }

    /// Return the next option code, like `getopt_long(3)`.
    ///
    /// # Return value
    ///
    /// - The option code ([Opt::option]) on success. The option argument
    ///   and long option index are available from [GetOpt::optarg()] and
    ///   [GetOpt::longind()].
    /// - [MISSING_ARGUMENT] for a missing option argument if the option
    ///   string starts with a colon.
    /// - [UNKNOWN_OPTION] for any other error. The details are available
    ///   from [GetOpt::last_error()] and [GetOpt::optopt()].
    /// - [None] at the end of the options.
    pub fn getopt(&mut self) -> Option<char> {
        let result = self.next_opt()?;

        let code = match result {
            Ok(opt) => opt.option,
            Err(Error::MissingRequiredArgument(_)) if self.rules.spec.missing_arg_colon() => {
                MISSING_ARGUMENT
            }
            Err(_) => UNKNOWN_OPTION,
        };

        Some(code)
    }

    /// The program name specified at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordering in use.
    pub fn ordering(&self) -> Ordering {
        self.rules.ordering
    }

    /// Index of the next element to scan. Once scanning has finished, this
    /// is the index of the first non-option argument.
    pub fn optind(&self) -> usize {
        self.cursor.optind
    }

    /// The option argument of the last result, if any.
    pub fn optarg(&self) -> Option<&str> {
        self.cursor.optarg.as_deref()
    }

    /// The option that caused the last error: the short option name, the
    /// [LongOpt::value] of a long option, or [FLAG_SET] for an unrecognized
    /// or ambiguous long option.
    pub fn optopt(&self) -> char {
        self.cursor.optopt
    }

    /// The long option table index of the last result, if it was a long
    /// option.
    pub fn longind(&self) -> Option<usize> {
        self.cursor.longind
    }

    /// The error from the last call, if it failed.
    pub fn last_error(&self) -> Option<&Error> {
        self.cursor.last_error.as_ref()
    }

    /// The (possibly permuted) argument vector.
    pub fn args(&self) -> &[String] {
        &self.argv
    }

    /// The arguments from [GetOpt::optind()] on. Once scanning has
    /// finished, these are the non-option arguments.
    pub fn remaining(&self) -> &[String] {
        &self.argv[self.cursor.optind.min(self.argv.len())..]
    }

    /// Give the (possibly permuted) argument vector back to the caller.
    pub fn into_args(self) -> Vec<String> {
        self.argv
    }
}

impl Iterator for GetOpt {
    type Item = Result<Opt>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_opt()
    }
}

impl FusedIterator for GetOpt {}
