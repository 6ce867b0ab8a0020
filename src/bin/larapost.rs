//! Command-line interface for larapost
//!
//! Usage:
//!   larapost `<input>` `<output>`  - Convert a Laravel routes file into a
//!                                    Postman collection JSON file

use clap::{Arg, Command};
use std::path::Path;

fn main() {
    let matches = Command::new("larapost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Laravel route files into Postman collections")
        .arg(
            Arg::new("input")
                .help("Path to the Laravel routes file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to save the Postman collection JSON")
                .required(true)
                .index(2),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    match larapost::pipeline::convert_file(Path::new(input), Path::new(output)) {
        Ok(()) => {
            println!("Successfully created Postman collection at {}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
