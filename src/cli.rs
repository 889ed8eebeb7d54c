use std::collections::BTreeSet;

use clap::Parser;
use tracing::debug;

use crate::error::{Error, Result};
use crate::segment::SegmentKind;

/// url-rs：在终端中拆解并展示 URL 的各个组成部分
#[derive(Parser, Debug)]
#[command(
    version,
    about = "解析命令行给出的 URL，并以对齐、带颜色的格式输出其组成部分。",
    long_about = r#"url-rs
======

解析命令行给出的 URL，输出协议、主机、端口、用户名、密码、路径、查询字符串和片段。

用法: url-rs [选项 ...] <URL>

选项（可重复，可组合）:
  --protocol, --scheme   协议
  --host                 主机名
  --port                 端口
  --username, --user     用户名
  --password             密码
  --path                 路径
  --query                查询字符串（同时列出解码后的查询参数）
  --fragment             片段

- 不带选项时输出全部组成部分
- 只给一个选项时仅输出该部分的原始值，便于在脚本中使用
- URL 为 `-` 时从标准输入读取
- 设置 NO_COLOR 环境变量可关闭颜色输出
"#
)]
pub struct Args {
    /// 选项列表，最后一个参数始终视为 URL
    #[arg(
        value_name = "ARGS",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

pub fn parse_args() -> Args {
    Args::parse()
}

/// 用户选择的组成部分，按声明顺序遍历
pub type SegmentSet = BTreeSet<SegmentKind>;

/// 由命令行参数解析出的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// 要解析的 URL
    pub url: String,
    /// 用户选择的组成部分
    pub segments: SegmentSet,
    /// 参数个数
    pub argc: usize,
}

fn flag_to_segment(flag: &str) -> Option<SegmentKind> {
    match flag {
        "--protocol" | "--scheme" => Some(SegmentKind::Protocol),
        "--host" => Some(SegmentKind::Host),
        "--port" => Some(SegmentKind::Port),
        "--username" | "--user" => Some(SegmentKind::Username),
        "--password" => Some(SegmentKind::Password),
        "--path" => Some(SegmentKind::Path),
        "--query" => Some(SegmentKind::Query),
        "--fragment" => Some(SegmentKind::Fragment),
        _ => None,
    }
}

impl Input {
    /// 从参数列表构造输入，未知选项返回错误
    pub fn from_args(args: &[String]) -> Result<Input> {
        let (url, flags) = args.split_last().ok_or(Error::MissingUrl)?;

        let mut segments = flags
            .iter()
            .map(|flag| flag_to_segment(flag).ok_or_else(|| Error::UnknownOption(flag.clone())))
            .collect::<Result<SegmentSet>>()?;

        if segments.is_empty() {
            segments = SegmentKind::ALL.into_iter().collect();
        }

        debug!(url = %url, ?segments, argc = args.len(), "resolved input");

        Ok(Input {
            url: url.clone(),
            segments,
            argc: args.len(),
        })
    }

    /// 只给出一个选项时使用精简输出
    pub fn is_compact(&self) -> bool {
        self.argc == 2
    }

    pub fn selected(&self, kind: SegmentKind) -> bool {
        self.segments.contains(&kind)
    }
}
