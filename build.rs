use std::env;
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

use phf_codegen::Map;
use uncased::UncasedStr;

/// Leading keywords recognized by `dialect::statement_kind`.
const STATEMENT_KEYWORDS: [(&str, &str); 23] = [
    ("ALTER", "StatementKind::Alter"),
    ("ANALYZE", "StatementKind::Analyze"),
    ("ATTACH", "StatementKind::Attach"),
    ("BEGIN", "StatementKind::Begin"),
    ("COMMIT", "StatementKind::Commit"),
    ("CREATE", "StatementKind::Create"),
    ("DELETE", "StatementKind::Delete"),
    ("DETACH", "StatementKind::Detach"),
    ("DROP", "StatementKind::Drop"),
    ("END", "StatementKind::Commit"),
    ("EXPLAIN", "StatementKind::Explain"),
    ("INSERT", "StatementKind::Insert"),
    ("PRAGMA", "StatementKind::Pragma"),
    ("REINDEX", "StatementKind::Reindex"),
    ("RELEASE", "StatementKind::Release"),
    ("REPLACE", "StatementKind::Replace"),
    ("ROLLBACK", "StatementKind::Rollback"),
    ("SAVEPOINT", "StatementKind::Savepoint"),
    ("SELECT", "StatementKind::Select"),
    ("UPDATE", "StatementKind::Update"),
    ("VACUUM", "StatementKind::Vacuum"),
    ("VALUES", "StatementKind::Values"),
    ("WITH", "StatementKind::With"),
];

fn main() -> Result<()> {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    let mut map = Map::new();
    for &(keyword, kind) in STATEMENT_KEYWORDS.iter() {
        map.entry(UncasedStr::new(keyword), kind);
    }

    let mut keywords = BufWriter::new(File::create(out_path.join("keywords.rs"))?);
    writeln!(
        &mut keywords,
        "static KEYWORDS: ::phf::Map<&'static UncasedStr, StatementKind> = \n{};",
        map.build()
    )?;
    keywords.flush()?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
