use std::io::Write;

use tracing::{debug, trace};

use crate::cli::SegmentSet;
use crate::colour::{Colour, Palette};
use crate::error::{Error, Result};
use crate::query;
use crate::segment::{ParsedUrl, SegmentKind};

fn print_header<W: Write>(out: &mut W, palette: &Palette, title: &str) -> Result<()> {
    let underline = "-".repeat(title.chars().count());
    writeln!(out)?;
    writeln!(out, "{}", palette.paint(Colour::Yellow, &format!(" {title}")))?;
    writeln!(out, "{}", palette.paint(Colour::Yellow, &format!(" {underline}")))?;
    writeln!(out)?;
    Ok(())
}

fn width(labels: impl IntoIterator<Item = usize>) -> usize {
    labels.into_iter().max().unwrap_or(0)
}

/// 精简模式：每行输出一个原始值，不加标签和颜色
pub fn print_compact<W: Write>(out: &mut W, url: &ParsedUrl, segments: &SegmentSet) -> Result<()> {
    for kind in segments {
        writeln!(out, "{}", kind.extract(url))?;
    }
    Ok(())
}

/// 以对齐的格式输出选中的 URL 组成部分
///
/// 对齐宽度按全部八个标签计算，值为空的部分不输出。
pub fn print_segments<W: Write>(
    out: &mut W,
    palette: &Palette,
    url: &ParsedUrl,
    segments: &SegmentSet,
) -> Result<()> {
    let labels: Vec<(SegmentKind, String)> = SegmentKind::ALL
        .into_iter()
        .map(|kind| (kind, palette.paint(Colour::Green, kind.label())))
        .collect();
    let padding = width(labels.iter().map(|(_, label)| label.chars().count()));

    print_header(out, palette, "URL Segments")?;

    for (kind, label) in &labels {
        if !segments.contains(kind) {
            continue;
        }
        let value = kind.extract(url);
        if value.is_empty() {
            trace!(segment = %kind, "skipping empty segment");
            continue;
        }
        writeln!(out, " {label:>padding$}: {value}")?;
    }
    Ok(())
}

/// 输出解码后的查询参数，参数名按字典序排列
///
/// 没有参数时不输出任何内容。
pub fn print_query<W: Write>(out: &mut W, palette: &Palette, url: &ParsedUrl) -> Result<()> {
    let raw = url.url().query().unwrap_or_default();
    let params = query::decode(raw).map_err(|source| Error::InvalidQuery {
        query: raw.to_string(),
        source,
    })?;
    debug!(count = params.len(), "decoded query parameters");

    if params.is_empty() {
        return Ok(());
    }

    let mut names: Vec<&String> = params.keys().collect();
    names.sort();

    let labels: Vec<String> = names
        .iter()
        .map(|name| palette.paint(Colour::Green, name))
        .collect();
    let padding = width(labels.iter().map(|label| label.chars().count()));

    print_header(out, palette, "Query Parameters")?;

    for (name, label) in names.iter().zip(&labels) {
        writeln!(out, " {label:>padding$}: {}", params[*name].join(", "))?;
    }
    Ok(())
}
