fn main() {
    pake_config::app::cli::run();
}
