use std::env;

use sqlite3_script::SqlScript;

/// Split specified files and print all statements.
// RUST_LOG=script=debug
fn main() {
    env_logger::init();
    let args = env::args();
    for arg in args.skip(1) {
        println!("{arg}");
        match SqlScript::from_file(&arg) {
            Err(err) => eprintln!("Err: {err}"),
            Ok(script) => {
                for (i, stmt) in script.iter().enumerate() {
                    println!("-- #{i} ({:?})\n{stmt};", stmt.kind());
                }
            }
        }
    }
}
