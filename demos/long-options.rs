// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing long options, including one that sets a flag
/// variable rather than being reported.
use getopt_long::{FlagSink, GetOpt, LongOpt, Need, Result, FLAG_SET};

fn main() -> Result<()> {
    env_logger::init();

    let verbose = FlagSink::default();

    let long_opts = vec![
        // "--verbose" just sets the variable.
        LongOpt::new("verbose").value('1').flag(verbose.clone()),
        LongOpt::new("file").needs(Need::Argument).value('f'),
        // Aliases: "--col" is not ambiguous.
        LongOpt::new("colour").needs(Need::Optional).value('c'),
        LongOpt::new("color").needs(Need::Optional).value('c'),
    ];

    let mut getopt = GetOpt::from_env("f:c::").long_opts(long_opts);

    while let Some(result) = getopt.next_opt() {
        let opt = result?;

        match opt.option {
            FLAG_SET => println!("INFO: flag option: {:?}", opt.long_index),
            'f' => println!("INFO: file: {:?}", opt.value),
            'c' => println!(
                "INFO: colour: {}",
                opt.value.as_deref().unwrap_or("auto")
            ),
            _ => (),
        }
    }

    println!("INFO: verbose: {}", verbose.get() == '1');
    println!("INFO: positional arguments: {:?}", getopt.remaining());

    Ok(())
}
