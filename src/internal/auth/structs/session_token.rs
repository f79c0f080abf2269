use core::fmt;
use std::sync::Arc;

/// STS 会话令牌
///
/// 每次运行只获取一次，不落盘；列表与下载接口都需要携带。
/// Arc避免每个下载任务都深拷贝一份
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(Arc<str>);

impl SessionToken {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 防止debug泄漏令牌，只保留前4位便于排查
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "SessionToken({prefix}***)")
    }
}
