fn main() {
    snippet_docs::cli::run();
}
