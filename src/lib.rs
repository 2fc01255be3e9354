// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Command-line option scanner that behaves like GNU `getopt_long(3)`.
//!
//! If you want a declarative parser that generates help text and converts
//! values for you, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! A [GetOpt] scanner is created for an argument vector. Each call returns
//! the next option found, until the end of the options is reached. The
//! scanner only classifies the arguments: what each option _means_ is up
//! to the caller.
//!
//! # Quickstart
//!
//! 1. Create a [GetOpt] for your arguments and a `getopt(3)` option
//!    string:
//!
//!    ```rust
//!    # use getopt_long::GetOpt;
//!    #
//!    let args = vec!["-v".to_string(), "-o".into(), "out.txt".into(), "in.txt".into()];
//!
//!    // Support "-v" and "-o <value>".
//!    let getopt = GetOpt::new("my app", args, "vo:");
//!    ```
//!
//!    > **Note:** Use [GetOpt::from_env()] to scan the program's own
//!    > command-line.
//!
//! 1. Optionally, add some long options and [Settings]:
//!
//!    ```rust
//!    # use getopt_long::{GetOpt, LongOpt, Need, Settings};
//!    #
//!    # let args = vec![];
//!    let getopt = GetOpt::new("my app", args, "vo:")
//!        .long_opts(vec![
//!            LongOpt::new("verbose").value('v'),
//!            LongOpt::new("output").needs(Need::Argument).value('o'),
//!        ])
//!        .settings(Settings::new().long_only());
//!    ```
//!
//! 1. Iterate over the options, then use the remaining (non-option)
//!    arguments:
//!
//!    ```rust
//!    # use getopt_long::GetOpt;
//!    #
//!    # let args = vec!["-v".to_string(), "-o".into(), "out.txt".into(), "in.txt".into()];
//!    # let mut getopt = GetOpt::new("my app", args, "vo:");
//!    #
//!    let mut verbose = false;
//!    let mut output = None;
//!
//!    while let Some(result) = getopt.next_opt() {
//!        match result {
//!            Ok(opt) => match opt.option {
//!                'v' => verbose = true,
//!                'o' => output = opt.value,
//!                _ => (),
//!            },
//!            Err(e) => eprintln!("{}: {}", getopt.name(), e),
//!        }
//!    }
//!
//!    assert!(verbose);
//!    assert_eq!(output, Some("out.txt".into()));
//!    assert_eq!(getopt.remaining(), &["in.txt".to_string()]);
//!    ```
//!
//! # Examples
//!
//! Below is a full example using long options, including one that sets a
//! flag variable, and the default argument permutation:
//!
//! ```rust
//! use getopt_long::{FlagSink, GetOpt, LongOpt, Need, FLAG_SET};
//!
//! let brief = FlagSink::default();
//!
//! let long_opts = vec![
//!     LongOpt::new("brief").value('b').flag(brief.clone()),
//!     LongOpt::new("colour").needs(Need::Optional).value('c'),
//!     LongOpt::new("color").needs(Need::Optional).value('c'),
//!     LongOpt::new("file").needs(Need::Argument).value('f'),
//! ];
//!
//! let args = vec!["one", "--br", "two", "--col=always", "--file", "x", "-c"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let mut getopt = GetOpt::new("my app", args, "c::f:").long_opts(long_opts);
//!
//! let mut seen = Vec::new();
//!
//! for result in &mut getopt {
//!     let opt = result.unwrap();
//!     seen.push((opt.option, opt.value));
//! }
//!
//! assert_eq!(
//!     seen,
//!     vec![
//!         (FLAG_SET, None),
//!         // "--col" is an abbreviation of two aliases, so not ambiguous.
//!         ('c', Some("always".into())),
//!         ('f', Some("x".into())),
//!         ('c', None),
//!     ]
//! );
//!
//! assert_eq!(brief.get(), 'b');
//!
//! // The non-options have been moved to the end.
//! assert_eq!(getopt.remaining(), &["one".to_string(), "two".into()]);
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -a foo -d -a bar -d -a baz
//! $ cargo run --example long-options -- --verbose --file=foo --col one two
//! $ cargo run --example in-order -- "posn 1" -d "posn 2" -a "hello world" "the end"
//! $ RUST_LOG=trace cargo run --example error-handler -- -x --ambig --wibble
//! ```
//!
//! # Details
//!
//! > **Note:** For further details, see `getopt(3)`.
//!
//! ## Option string
//!
//! Each character of the option string is a short option name. A
//! character followed by a colon requires an argument, which is either the
//! rest of the same element (`-ofoo`) or the next element (`-o foo`). A
//! character followed by two colons accepts an optional argument, which
//! must be in the same element (`-ofoo`).
//!
//! The option string may begin with:
//!
//! - `+`: Use [Ordering::RequireOrder].
//! - `-`: Use [Ordering::ReturnInOrder].
//! - `:` (after any `+` or `-`): [GetOpt::getopt()] returns
//!   [MISSING_ARGUMENT] rather than [UNKNOWN_OPTION] for a missing option
//!   argument.
//!
//! ## Long options
//!
//! Long options are given as `--name`, `--name=value` or (if the option
//! requires an argument) `--name value`. Names may be abbreviated to any
//! unique prefix; an exact match always wins.
//!
//! With [Settings::long_only()], long options may also be given with a
//! single dash.
//!
//! ## Ordering
//!
//! By default ([Ordering::Permute]) the argument vector is permuted as
//! scanning proceeds so that, once the end of the options has been
//! reached, all the non-option arguments are at the end, in their original
//! relative order, starting at [GetOpt::optind()].
//!
//! The special argument `--` ends option scanning in every ordering.
//!
//! ## POSIX mode
//!
//! [Settings::posixly_correct()] (or [Settings::from_env()] with
//! `POSIXLY_CORRECT` set in the environment) selects
//! [Ordering::RequireOrder] unless the option string says otherwise, and
//! makes `-o -- foo` (where `-o` requires an argument) mean `-o foo`
//! followed by the end of the options.
//!
//! # Summary of features and behaviour
//!
//! - Parses arguments in order, one option per call.
//! - Option bundling (`-abc`) and attached values (`-ofoo`).
//! - Long options with unique-prefix abbreviation.
//! - Option arguments are always returned as strings.
//!
//!   The caller can convert them into numerics, _etc_ as required.
//!
//! - Errors are returned as values and never stop the scan: calling again
//!   carries on with the next option.
//! - Nothing is ever printed. Errors implement `Display` for convenience.
//!
//! # Limitations
//!
//! - No help / usage statement generation.
//! - The `-W foo` alias for `--foo` is not supported.
//! - A scanner must not be shared between threads.

mod error;
mod getopt;
mod long;
mod optstring;
mod ordering;
mod permute;
mod settings;

pub use error::{Error, Result};

pub use getopt::{GetOpt, Opt, FLAG_SET, MISSING_ARGUMENT, NON_OPTION, UNKNOWN_OPTION};
pub use long::{FlagSink, LongOpt};
pub use optstring::{Need, OptString};
pub use ordering::Ordering;
pub use settings::{get_args, Settings, POSIXLY_CORRECT_ENV_VAR};
