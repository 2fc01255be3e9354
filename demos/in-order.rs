// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to handle options and positional arguments in
/// the order they were specified.
use getopt_long::{GetOpt, Result, NON_OPTION};

fn main() -> Result<()> {
    env_logger::init();

    // The leading '-' requests that positional arguments are reported in
    // order rather than moved to the end.
    let getopt = GetOpt::from_env("-a:d");

    for (i, result) in getopt.enumerate() {
        let opt = result?;

        match opt.option {
            NON_OPTION => println!("INFO: {}: positional argument: {:?}", i, opt.value),
            'a' => println!("INFO: {}: option 'a': {:?}", i, opt.value),
            'd' => println!("INFO: {}: flag 'd'", i),
            _ => (),
        }
    }

    Ok(())
}
