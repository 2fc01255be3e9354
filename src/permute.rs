// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use log::debug;

const OPT_PREFIX: char = '-';
const STDIN_ARG: &str = "-";

/// Returns true if the argument is a non-option ("positional") argument.
///
/// An empty string and a lone dash (conventionally "standard input") are
/// both non-options.
pub(crate) fn is_non_option(arg: &str) -> bool {
    !arg.starts_with(OPT_PREFIX) || arg == STDIN_ARG
}

/// Swap the two adjacent blocks `[bottom, middle)` and `[middle, top)`
/// in place.
///
/// The shorter block is swapped with the far end of the longer block. That
/// puts the shorter block in its final position and leaves the longer
/// block in the right place overall, but split in two parts that are
/// swapped on the next iteration.
///
/// Only pairwise swaps are used: nothing is allocated.
pub(crate) fn exchange<T>(argv: &mut [T], bottom: usize, middle: usize, top: usize) {
    let mut bottom = bottom;
    let mut top = top;

    while top > middle && middle > bottom {
        if top - middle > middle - bottom {
            // Bottom block is the short one.
            let len = middle - bottom;

            for i in 0..len {
                argv.swap(bottom + i, top - len + i);
            }

            top -= len;
        } else {
            // Top block is the short one.
            let len = top - middle;

            for i in 0..len {
                argv.swap(bottom + i, middle + i);
            }

            bottom += len;
        }
    }
}

/// The run of non-option arguments that have been skipped but not yet
/// moved behind the options that follow them.
///
/// `[first, last)` holds the skipped non-options, and `[last, optind)`
/// the options consumed since.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct NonOptions {
    pub first: usize,
    pub last: usize,
}

impl NonOptions {
    /// Set if non-options have been skipped.
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Move the skipped non-options after the options consumed since they
    /// were skipped (the elements up to `optind`), then record their new
    /// location.
    ///
    /// If nothing was skipped, the (empty) run restarts at `optind`.
    pub fn relocate<T>(&mut self, argv: &mut [T], optind: usize) {
        if !self.is_empty() && self.last != optind {
            debug!(
                "exchanging non-options [{}, {}) with options [{}, {})",
                self.first, self.last, self.last, optind
            );

            exchange(argv, self.first, self.last, optind);

            self.first += optind - self.last;
            self.last = optind;
        } else if self.last != optind {
            self.first = optind;
            self.last = optind;
        }
    }
}
