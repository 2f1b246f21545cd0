fn main() {
    mpvcfg::app::cli::run();
}
