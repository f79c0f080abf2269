use serde_json::Value;
use tracing::warn;

use crate::remote_file::RemoteEntry;

use super::meta_list::{MetaListData, RawMeta};

pub trait ToRemoteEntries {
    /// 转换成领域模型，并给每个条目打上层级
    fn to_remote_entries(self, level: u32) -> Vec<RemoteEntry>;
}

fn to_entry(value: Value, level: u32) -> Option<RemoteEntry> {
    let raw: RawMeta = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("跳过格式异常的条目: {e}");
            return None;
        }
    };

    let RawMeta {
        meta_id,
        file_name,
        absolute_path,
        dir,
        file_size,
    } = raw;

    Some(RemoteEntry {
        meta_id,
        name: file_name,
        absolute_path,
        is_dir: dir,
        level,
        size: if dir { None } else { file_size },
    })
}

impl ToRemoteEntries for MetaListData {
    fn to_remote_entries(self, level: u32) -> Vec<RemoteEntry> {
        self.meta_list
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| to_entry(value, level))
            .collect()
    }
}
