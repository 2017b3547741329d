fn main() {
    if let Err(e) = laptop_brick::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
