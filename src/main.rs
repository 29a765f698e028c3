fn main() -> anyhow::Result<()> {
    console_klondike::run()
}
