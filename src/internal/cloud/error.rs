//! 目录列表相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("列表请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("列表状态异常 {status}（dirId: {dir_id}）: {body}")]
    Status {
        status: reqwest::StatusCode,
        dir_id: String,
        body: String,
    },

    #[error("列表响应不是合法 JSON（dirId: {dir_id}）: {source}")]
    Decode {
        dir_id: String,
        #[source]
        source: serde_json::Error,
    },
}
