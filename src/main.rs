fn main() {
    std::process::exit(pressmark::cli::run());
}
