use std::io;
use thiserror::Error;

use crate::query::QueryError;

/// 程序运行中可能出现的错误
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown option given: {0}")]
    UnknownOption(String),

    #[error("no url given")]
    MissingUrl,

    #[error("unable to parse url: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unable to parse query: {query}")]
    InvalidQuery {
        query: String,
        #[source]
        source: QueryError,
    },

    #[error("unable to read url from stdin")]
    Stdin(#[source] io::Error),

    #[error("unable to write output")]
    Io(#[from] io::Error),
}

impl Error {
    /// 诊断信息拆成前缀和对象（选项名或 URL），只有前缀上色
    pub fn diagnostic(&self) -> (&'static str, Option<&str>) {
        match self {
            Error::UnknownOption(flag) => ("unknown option given:", Some(flag.as_str())),
            Error::MissingUrl => ("no url given", None),
            Error::InvalidUrl { url, .. } => ("unable to parse url:", Some(url.as_str())),
            Error::InvalidQuery { query, .. } => ("unable to parse query:", Some(query.as_str())),
            Error::Stdin(_) => ("unable to read url from stdin", None),
            Error::Io(_) => ("unable to write output", None),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
