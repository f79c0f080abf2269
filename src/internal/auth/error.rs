//! 认证相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("请求头格式错误 {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("创建 http 客户端失败: {0}")]
    BuildClient(#[source] reqwest::Error),

    #[error("获取令牌请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("获取令牌状态异常 {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("令牌响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("响应中缺少 data.stsToken（code: {code}, msg: {msg}）")]
    MissingToken { code: String, msg: String },
}
