pub fn run() -> anyhow::Result<()> {
    println!("autorank {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
