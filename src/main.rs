use std::process;

fn main() {
    let args = antpath::cli::get_args();

    match antpath::run::run(args) {
        Ok(0) => process::exit(1),
        Ok(_) => (),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    }
}
