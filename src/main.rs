fn main() {
    orion_pack::app::cli::run();
}
