use clap::{App, Arg};

#[derive(Debug)]
pub struct Args {
    pub patterns: Vec<String>,
    pub excludes: Vec<String>,
    pub dir: String,
    pub tests: Vec<String>,
    pub ignore_case: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub dirs: bool,
    pub print_regex: bool,
    pub debug: bool,
}

pub fn get_args() -> Args {
    let args = App::new("antpath")
        .version(crate_version!())
        .about("Match and list paths using NAnt-style glob patterns")
        .arg(Arg::with_name("pattern")
                 .help("Patterns a path must match to be selected")
                 .multiple(true)
                 .required(true))
        .arg(Arg::with_name("dir")
                 .help("Scan a specific directory, defaults to the current one")
                 .short("d")
                 .long("dir")
                 .number_of_values(1)
                 .takes_value(true))
        .arg(Arg::with_name("test")
                 .help("Match the given path instead of scanning a directory")
                 .short("t")
                 .long("test")
                 .number_of_values(1)
                 .multiple(true)
                 .takes_value(true)
                 .value_name("path"))
        .arg(Arg::with_name("exclude")
                 .help("Deselect paths matching the pattern")
                 .short("x")
                 .long("exclude")
                 .number_of_values(1)
                 .multiple(true)
                 .takes_value(true)
                 .value_name("pattern"))
        .arg(Arg::with_name("ignore-case")
                 .help("Compare patterns and paths without regard to case")
                 .short("i")
                 .long("ignore-case"))
        .arg(Arg::with_name("follow")
                 .help("Follow symbolic links while scanning")
                 .short("L")
                 .long("follow"))
        .arg(Arg::with_name("max-depth")
                 .help("Descend at most the given number of directory levels")
                 .long("max-depth")
                 .takes_value(true)
                 .value_name("levels"))
        .arg(Arg::with_name("dirs")
                 .help("Report directories as well, not only files")
                 .long("dirs"))
        .arg(Arg::with_name("no-default-excludes")
                 .help("Skip the built-in excludes for VCS bookkeeping files")
                 .long("no-default-excludes"))
        .arg(Arg::with_name("regex")
                 .help("Print the translated regular expression for each pattern and exit")
                 .short("r")
                 .long("regex"))
        .arg(Arg::with_name("verbose")
                 .help("Print debugging messages to stderr")
                 .short("v")
                 .long("verbose"))
        .get_matches();

    let patterns = values_t!(args.values_of("pattern"), String).unwrap_or_else(|e| e.exit());
    let dir = args.value_of("dir").unwrap_or(".").to_string();
    let tests = values_t!(args.values_of("test"), String).unwrap_or(vec![]);

    let mut excludes = vec![];
    let default_excludes = vec![String::from("**/.git/**"),
                                String::from("**/.svn/**"),
                                String::from("**/.hg/**"),
                                String::from("**/CVS/**"),
                                String::from("**/.DS_Store")];

    if args.occurrences_of("no-default-excludes") == 0 {
        excludes.extend(default_excludes)
    };
    excludes.extend(values_t!(args.values_of("exclude"), String).unwrap_or(vec![]));

    let max_depth = if args.occurrences_of("max-depth") > 0 {
        Some(value_t!(args.value_of("max-depth"), usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    Args {
        patterns: patterns,
        excludes: excludes,
        dir: dir,
        tests: tests,
        ignore_case: args.is_present("ignore-case"),
        follow_links: args.is_present("follow"),
        max_depth: max_depth,
        dirs: args.is_present("dirs"),
        print_regex: args.is_present("regex"),
        debug: args.is_present("verbose"),
    }
}
