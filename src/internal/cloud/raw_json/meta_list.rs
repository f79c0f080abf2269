use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 列表接口的 `data` 节点
///
/// `metaList` 先按原始 JSON 接收，逐条再转成 [`RawMeta`]，单条格式异常时只跳过那一条
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MetaListData {
    #[serde(rename = "metaList")]
    pub meta_list: Option<Vec<Value>>,
}

/// `metaList` 中的单个条目（文件或目录）
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawMeta {
    /// 条目 id，目录的 id 同时作为下一层列表请求的 `dirId`
    #[serde(deserialize_with = "de_string_or_number")]
    pub meta_id: String,

    pub file_name: String,

    /// 以 `/` 开头的完整路径，文件的路径包含文件名本身
    pub absolute_path: String,

    #[serde(default)]
    pub dir: bool,

    /// 文件大小（字节），目录一般没有此字段
    #[serde(default, deserialize_with = "de_lenient_u64")]
    pub file_size: Option<u64>,
}

/// id 可能是字符串也可能是数字，统一转成字符串
fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "metaId 类型异常: {other}"
        ))),
    }
}

/// 大小字段解析不了就当作未知，不影响整条记录
fn de_lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
