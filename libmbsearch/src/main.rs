use anyhow::Context;
use clap::Parser;
use libmbsearch::{Config, SearchSession};
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Interactive fuzzy multibyte search over a document.
///
/// Loads a complex-char → simple-chars dictionary, then reads queries from
/// stdin and prints the matches and the enriched pattern for each.
#[derive(Debug, Parser)]
#[command(name = "mbsearch")]
struct Args {
    /// Dictionary file (one `COMPLEX_CHAR SIMPLE_CHARS` entry per line)
    dict: PathBuf,

    /// Document to scan
    content: PathBuf,

    /// Join matched literals raw instead of escaping regex metacharacters
    #[arg(long)]
    no_escape: bool,

    /// Compile the pattern case-sensitively
    #[arg(long)]
    case_sensitive: bool,
}

/// 1-based line and char column of a byte offset in `content`.
fn line_col(content: &str, byte_idx: usize) -> (usize, usize) {
    let before = &content[..byte_idx];
    let line = before.matches('\n').count() + 1;
    let col = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, col)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::default();
    config.escape_literals = !args.no_escape;
    config.case_insensitive = !args.case_sensitive;

    let mut session = SearchSession::with_config(config);
    let diagnostics = session
        .load_dict_file(&args.dict)
        .with_context(|| format!("read dictionary {}", args.dict.display()))?;
    for diag in &diagnostics {
        eprintln!("⚠ {diag}");
    }

    let content = std::fs::read_to_string(&args.content)
        .with_context(|| format!("read document {}", args.content.display()))?;

    println!("Ready! Type a simple-char query and press Enter.");
    println!("Press Ctrl+C to exit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let query = line?;
        let query = query.trim();
        if query.is_empty() {
            continue;
        }

        let matches = session.match_list(query, &content)?;
        if matches.is_empty() {
            println!("  → (no matches)\n");
            continue;
        }
        for (i, m) in matches.iter().enumerate() {
            println!("  {}. {}", i + 1, m);
        }

        let pattern = session.enrich(query, &content)?;
        println!("  pattern: {}", pattern.as_str());
        for found in pattern.find_iter(&content) {
            let (line, col) = line_col(&content, found.start());
            println!("  hit at {}:{}  {}", line, col, found.as_str());
        }
        println!();
    }

    Ok(())
}
