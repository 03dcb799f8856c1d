fn main() {
    if let Err(e) = hostsedit::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
