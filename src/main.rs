fn main() {
    documentor::app::cli::run();
}
