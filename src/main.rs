fn main() {
    if let Err(err) = chartfeed::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
