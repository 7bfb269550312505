fn main() -> std::io::Result<()> {
    codecraft::run()
}
