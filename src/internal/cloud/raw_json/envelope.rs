use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 云盘接口统一的外层响应 `{ "code": .., "msg": .., "data": .. }`
///
/// `code` 在不同接口里可能是数字也可能是字符串，所以保留原始 JSON 值
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiEnvelope<T> {
    pub code: Option<Value>,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// 便于日志输出的 code 文本，缺失时为 "-"
    pub fn code_text(&self) -> String {
        match &self.code {
            Some(Value::String(s)) => s.clone(),
            Some(v) => v.to_string(),
            None => "-".to_string(),
        }
    }

    pub fn msg_text(&self) -> String {
        self.msg.clone().unwrap_or_else(|| "-".to_string())
    }
}

/// 获取令牌接口的 `data` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StsTokenData {
    #[serde(rename = "stsToken")]
    pub sts_token: Option<String>,
}
