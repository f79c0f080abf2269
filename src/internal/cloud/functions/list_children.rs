use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{CloudAuth, SessionToken};
use crate::internal::cloud::error::ListError;
use crate::internal::cloud::raw_json::envelope::ApiEnvelope;
use crate::internal::cloud::raw_json::impl_meta_list::ToRemoteEntries;
use crate::internal::cloud::raw_json::meta_list::MetaListData;
use crate::remote_file::RemoteEntry;

/// 列出某个目录下的直接子条目，不做递归处理，所以需要递归请用 [`crate::walk`]
///
/// - `dir_id` 为空字符串时表示根目录
/// - `level` 会原样写入每个返回条目的 `level`
///
/// 响应是合法 JSON 但缺少 `data` / `data.metaList` 时按空目录处理，不视为错误
pub async fn list_children(
    auth: &CloudAuth,
    token: &SessionToken,
    dir_id: &str,
    level: u32,
) -> Result<Vec<RemoteEntry>, ListError> {
    let mut url = auth.config.list_url.clone();
    url.query_pairs_mut()
        .append_pair("sysToken", token.as_str())
        .append_pair("dirId", dir_id)
        .append_pair("pageSize", &auth.config.page_size.to_string())
        .append_pair("preName", "")
        .append_pair("preIsDir", "")
        .append_pair("_t", &super::timestamp_millis());

    debug!("列出目录 dirId={dir_id:?} level={level}");

    let res = auth.client.get(url).send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(ListError::Status {
            status,
            dir_id: dir_id.to_string(),
            body,
        });
    }

    let envelope: ApiEnvelope<Value> =
        serde_json::from_str(&body).map_err(|source| ListError::Decode {
            dir_id: dir_id.to_string(),
            source,
        })?;

    let code = envelope.code_text();
    let msg = envelope.msg_text();

    let Some(data) = envelope.data else {
        warn!("目录 {dir_id:?} 的响应缺少 data，按空目录处理（code: {code}, msg: {msg}）");
        return Ok(Vec::new());
    };

    let meta_list: MetaListData = match serde_json::from_value(data) {
        Ok(meta_list) => meta_list,
        Err(e) => {
            warn!("目录 {dir_id:?} 的 data 结构异常，按空目录处理: {e}");
            return Ok(Vec::new());
        }
    };

    if meta_list.meta_list.is_none() {
        debug!("目录 {dir_id:?} 没有 metaList，按空目录处理");
    }

    Ok(meta_list.to_remote_entries(level))
}
