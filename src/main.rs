use anyhow::Result;

fn main() -> Result<()> {
    brainlearn::cli::run()
}
