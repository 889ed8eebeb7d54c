use std::fmt;

use percent_encoding::percent_decode_str;
use url::{Host, Url};

/// 解析后的 URL，同时记录输入中显式写出的端口
///
/// `Url` 会省略与协议默认值相同的端口（如 `https://h:443`），
/// 这里在解析时从原始输入的 authority 部分找回它。
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    url: Url,
    port: Option<u16>,
}

impl ParsedUrl {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(raw)?;
        let port = url.port().or_else(|| {
            if has_explicit_port(raw.trim()) {
                url.port_or_known_default()
            } else {
                None
            }
        });
        Ok(Self { url, port })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 输入中显式给出的端口
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.url, f)
    }
}

// `scheme://[userinfo@]host:port` with a non-empty numeric port
fn has_explicit_port(raw: &str) -> bool {
    let Some(rest) = raw.split_once(':').and_then(|(_, rest)| rest.strip_prefix("//")) else {
        return false;
    };
    let authority = rest.split(['/', '\\', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host_port)| host_port);
    // skip past an IPv6 literal
    let tail = match host_port.rfind(']') {
        Some(end) => &host_port[end + 1..],
        None => host_port,
    };
    tail.split_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
}

fn decoded(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

/// URL 的组成部分
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    Protocol,
    Host,
    Port,
    Username,
    Password,
    Path,
    Query,
    Fragment,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl SegmentKind {
    /// 按固定顺序排列的全部组成部分
    pub const ALL: [SegmentKind; 8] = [
        SegmentKind::Protocol,
        SegmentKind::Host,
        SegmentKind::Port,
        SegmentKind::Username,
        SegmentKind::Password,
        SegmentKind::Path,
        SegmentKind::Query,
        SegmentKind::Fragment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SegmentKind::Protocol => "Protocol",
            SegmentKind::Host => "Host",
            SegmentKind::Port => "Port",
            SegmentKind::Username => "Username",
            SegmentKind::Password => "Password",
            SegmentKind::Path => "Path",
            SegmentKind::Query => "Query",
            SegmentKind::Fragment => "Fragment",
        }
    }

    /// 从 URL 中取出该部分的值，不存在时返回空字符串
    ///
    /// 用户名、密码和路径会做百分号解码。
    pub fn extract(self, parsed: &ParsedUrl) -> String {
        let url = parsed.url();
        match self {
            SegmentKind::Protocol => url.scheme().to_string(),
            SegmentKind::Host => match url.host() {
                // IPv6 literal without the brackets
                Some(Host::Ipv6(addr)) => addr.to_string(),
                Some(Host::Ipv4(addr)) => addr.to_string(),
                Some(Host::Domain(domain)) => domain.to_string(),
                None => String::new(),
            },
            SegmentKind::Port => parsed.port().map(|p| p.to_string()).unwrap_or_default(),
            SegmentKind::Username => decoded(url.username()),
            SegmentKind::Password => url.password().map(decoded).unwrap_or_default(),
            SegmentKind::Path => decoded(url.path()),
            SegmentKind::Query => url.query().unwrap_or_default().to_string(),
            SegmentKind::Fragment => url.fragment().unwrap_or_default().to_string(),
        }
    }
}
