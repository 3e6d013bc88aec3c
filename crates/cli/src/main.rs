fn main() -> anyhow::Result<()> {
    ridgeline::run()
}
