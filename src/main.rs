use uconv::uconv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let results = uconv(std::env::args_os().skip(1));
    if results.is_err() {
        eprintln!("Usage: uconv [files]");
    }
    results
}
