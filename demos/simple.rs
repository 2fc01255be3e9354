// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to handle short options that need arguments.
use getopt_long::{GetOpt, Result};

/// The type we will use to record the options found for this program.
#[derive(Clone, Debug, Default)]
struct MyOptions {
    // Let's keep track of the number of times particular options are
    // specified on the command-line.
    a_count: usize,
    b_count: usize,
    d_count: usize,

    // Values given to the options that need one.
    values: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut options = MyOptions::default();

    // Support "-a <value>", "-b <value>" and the "-d" flag option.
    let mut getopt = GetOpt::from_env("a:b:d");

    while let Some(result) = getopt.next_opt() {
        let opt = result?;

        println!("INFO: option: {:?}", opt);

        match opt.option {
            'a' => options.a_count += 1,
            'b' => options.b_count += 1,
            'd' => options.d_count += 1,
            _ => (),
        };

        if let Some(value) = opt.value {
            options.values.push(value);
        }
    }

    println!("INFO: options: {:?}", options);
    println!("INFO: positional arguments: {:?}", getopt.remaining());

    Ok(())
}
