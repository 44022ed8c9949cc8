fn main() -> anyhow::Result<()> {
    search_query_builder::cli::run()
}
