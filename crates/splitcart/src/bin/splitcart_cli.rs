use std::process;

fn main() {
    splitcart::init();

    if let Err(err) = splitcart::cli::run_cli() {
        eprintln!("fatal: {}", err);
        process::exit(1);
    }
}
