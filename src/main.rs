fn main() {
    if let Err(err) = pitchmap::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
