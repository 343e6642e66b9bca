pub mod unicode;

pub use unicode::{decode, encode, DecodeError, EncodeError};

use itertools::Itertools;

pub fn uconv(argv: impl Iterator<Item = std::ffi::OsString>) -> Result<(), Box<dyn std::error::Error>> {
    let argv = argv.collect_vec();
    if argv.is_empty() {
        if let Ok(exe) = std::env::current_exe() {
            eprintln!("Not enough arguments. Usage: {} [files]", exe.display());
        } else {
            eprintln!("Not enough arguments. Usage: uconv [files]");
        }
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    }
    for argument in argv.iter() {
        print!("{}: ", argument.to_string_lossy());
        let possible_file = std::fs::read(std::path::Path::new(&argument));
        match possible_file {
            Ok(file) => match unicode::decode(&file) {
                Ok(code_points) => {
                    println!(
                        "{}",
                        code_points
                            .iter()
                            .format_with(" ", |point, f| f(&format_args!("U+{point:04X}")))
                    )
                }
                Err(error) => {
                    println!("{error}")
                }
            },
            Err(error) => {
                println!("{error}");
            }
        }
    }
    Ok(())
}
