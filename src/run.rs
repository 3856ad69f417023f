use std::io::Write;
use std::path::Path;

use crate::cli;
use crate::config::ConfigBuilder;
use crate::error::{Error, Result};
use crate::fileset::FileSet;
use crate::pattern;
use crate::scan;

fn init_logger(debug: bool) {
    let mut log_builder = env_logger::Builder::new();
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    log_builder
        .format(|buf, r| writeln!(buf, "*** {}", r.args()))
        .filter(None, level)
        .init();
}

/// Runs the tool, printing matched paths, and returns how many matched.
pub fn run(args: cli::Args) -> Result<usize> {
    init_logger(args.debug);

    if args.print_regex {
        for pattern in &args.patterns {
            println!("{}", pattern::build_regex(pattern));
        }
        return Ok(args.patterns.len());
    }

    // Explicit candidates: match them as strings, no filesystem involved.
    if !args.tests.is_empty() {
        let set = FileSet::new(&args.patterns, &args.excludes, args.ignore_case);

        let mut matched = 0;
        for path in &args.tests {
            if set.selects(path) {
                println!("{}", path);
                matched += 1;
            }
        }
        return Ok(matched);
    }

    let root = Path::new(&args.dir)
        .canonicalize()
        .map_err(|err| Error::Canonicalization(args.dir.clone(), err))?;
    debug!("Scanning {:?}", root);

    let mut builder = ConfigBuilder::default();
    builder
        .patterns(args.patterns)
        .excludes(args.excludes)
        .root(root)
        .ignore_case(args.ignore_case)
        .follow_links(args.follow_links)
        .dirs(args.dirs);
    if let Some(depth) = args.max_depth {
        builder.max_depth(depth);
    }
    let config = builder.build()?;

    let selected = scan::scan(&config)?;
    for path in &selected {
        println!("{}", pattern::forwardify_slashes(&path.to_string_lossy()));
    }

    Ok(selected.len())
}
