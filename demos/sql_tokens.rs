use std::env;
use std::fs::read_to_string;

use sqlite3_script::lexer::sql::{TokenType, Tokens};

/// Tokenize specified files and print comments and literals.
// RUST_LOG=scanner=debug
fn main() {
    env_logger::init();
    let args = env::args();
    for arg in args.skip(1) {
        let input = match read_to_string(&arg) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("Err: {err} in {arg}");
                continue;
            }
        };
        let mut tokens = Tokens::new(&input);
        loop {
            let line = tokens.line();
            match tokens.next() {
                None => break,
                Some((_, TokenType::Code)) => {}
                Some((token, token_type)) => println!("{arg}:{line}: {token_type:?} {token:?}"),
            }
        }
    }
}
