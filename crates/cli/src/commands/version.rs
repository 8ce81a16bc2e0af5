pub fn run() {
    println!("regex-tester-cli {}", env!("CARGO_PKG_VERSION"));
}
