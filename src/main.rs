mod driver;

fn main() -> anyhow::Result<()> {
    driver::main_inner()
}
