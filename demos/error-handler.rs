// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to report errors and carry on scanning.
use getopt_long::{Error, GetOpt, LongOpt, Need};

fn main() {
    env_logger::init();

    let long_opts = vec![
        LongOpt::new("ambiguous").value('a'),
        LongOpt::new("ambient").value('b'),
        LongOpt::new("name").needs(Need::Argument).value('n'),
    ];

    let mut getopt = GetOpt::from_env(":n:").long_opts(long_opts);

    let mut errors = 0;

    while let Some(result) = getopt.next_opt() {
        match result {
            Ok(opt) => println!("INFO: option: {:?}", opt),
            Err(Error::AmbiguousLongOption { option, candidates }) => {
                errors += 1;
                eprintln!(
                    "{}: '{}' could be any of: {}",
                    getopt.name(),
                    option,
                    candidates.join(", ")
                );
            }
            Err(e) => {
                errors += 1;
                eprintln!("{}: {} (offending option: {})", getopt.name(), e, e.option());
            }
        }
    }

    println!("INFO: {} error(s)", errors);

    if errors > 0 {
        std::process::exit(1);
    }
}
