mod cli;
mod colour;
mod error;
mod logging;
mod printer;
mod query;
mod segment;

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use tracing::debug;

use cli::{Input, parse_args};
use colour::{Colour, Palette};
use error::{Error, Result};
use segment::{ParsedUrl, SegmentKind};

/// Parses the URL given on the command line and prints its segments.
///
/// Prints a diagnostic to standard error and exits with status 1 on failure.
///
/// # Examples
///
/// ```
/// // cargo run -- https://user:pw@example.com:8080/p?x=1#frag
/// // cargo run -- --host https://example.com/p
/// ```
fn main() -> ExitCode {
    let args = parse_args();
    let palette = Palette::from_env();
    logging::init(palette.enabled);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(&args.args, &palette, &mut out).and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // whatever was printed before the failure still goes out first
            let _ = out.flush();
            eprintln!();
            eprintln!("{}", diagnostic(&palette, &e));
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("   {source}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(args: &[String], palette: &Palette, out: &mut W) -> Result<()> {
    let mut input = Input::from_args(args)?;
    if input.url == "-" {
        input.url = read_url(io::stdin().lock())?;
    }

    let url = ParsedUrl::parse(&input.url).map_err(|source| Error::InvalidUrl {
        url: input.url.clone(),
        source,
    })?;
    debug!(%url, compact = input.is_compact(), "parsed url");

    if input.is_compact() {
        return printer::print_compact(out, &url, &input.segments);
    }

    printer::print_segments(out, palette, &url, &input.segments)?;

    if !input.selected(SegmentKind::Query) {
        return Ok(());
    }

    printer::print_query(out, palette, &url)
}

/// 红色前缀，后面跟未上色的选项名或 URL
fn diagnostic(palette: &Palette, error: &Error) -> String {
    let (prefix, subject) = error.diagnostic();
    let prefix = palette.paint(Colour::Red, &format!(" {prefix}"));
    match subject {
        Some(subject) => format!("{prefix} {subject}"),
        None => prefix,
    }
}

/// 从标准输入读取第一行作为 URL
fn read_url<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(Error::Stdin)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_plain(list: &[&str]) -> Result<String> {
        let args: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        let mut buf = Vec::new();
        run(&args, &Palette::new(false), &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_full_mode_prints_both_blocks() {
        let out = run_plain(&["https://user:pw@example.com:8080/p?x=1&a=2#frag"]).unwrap();
        assert!(out.contains(" URL Segments\n"));
        assert!(out.contains(" Query Parameters\n"));
        let a = out.find(" a: 2\n").unwrap();
        let x = out.find(" x: 1\n").unwrap();
        assert!(a < x);
    }

    #[test]
    fn test_query_block_needs_query_selected() {
        let out = run_plain(&["--host", "--path", "https://example.com/p?x=1"]).unwrap();
        assert!(out.contains("Host: example.com"));
        assert!(out.contains("Path: /p"));
        assert!(!out.contains("Query Parameters"));
    }

    #[test]
    fn test_compact_mode() {
        assert_eq!(run_plain(&["--host", "https://example.com/p"]).unwrap(), "example.com\n");
        assert_eq!(run_plain(&["--fragment", "https://example.com/p"]).unwrap(), "\n");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            run_plain(&["--bogus", "https://example.com"]),
            Err(Error::UnknownOption(_))
        ));
        assert!(matches!(run_plain(&["example.com"]), Err(Error::InvalidUrl { .. })));
        assert!(matches!(
            run_plain(&["--query", "--path", "https://example.com/?a=1;b=2"]),
            Err(Error::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_diagnostic_paints_prefix_only() {
        let err = Error::UnknownOption("--bogus".to_string());
        assert_eq!(
            diagnostic(&Palette::new(true), &err),
            "\x1b[38;5;1m unknown option given:\x1b[0m --bogus"
        );
        assert_eq!(diagnostic(&Palette::new(false), &err), " unknown option given: --bogus");
        assert_eq!(diagnostic(&Palette::new(false), &Error::MissingUrl), " no url given");
    }

    #[test]
    fn test_read_url_trims_line() {
        let url = read_url(&b"  https://example.com/p \nignored\n"[..]).unwrap();
        assert_eq!(url, "https://example.com/p");
    }
}
