fn main() {
    if let Err(e) = svlex_drv::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
