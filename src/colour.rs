use std::env;

/// 256 色终端调色板中的基础颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Colour {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

/// 控制是否输出颜色转义序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// 从环境变量读取：设置了非空的 `NO_COLOR` 时关闭颜色
    pub fn from_env() -> Self {
        let disabled = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!disabled)
    }

    /// 用转义序列包裹文本
    pub fn paint(&self, colour: Colour, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[38;5;{}m{}\x1b[0m", colour as u8, text)
    }
}
