fn main() {
    std::process::exit(hydrogen_cli::cli::run_from_env());
}
