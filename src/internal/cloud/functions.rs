pub mod get_sts_token;
pub mod list_children;

/// 接口要求的 `_t` 参数：当前毫秒时间戳
pub(crate) fn timestamp_millis() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
