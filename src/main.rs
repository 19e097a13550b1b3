fn main() {
    if let Err(e) = gsd::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
