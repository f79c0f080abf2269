use futures_util::future::BoxFuture;
use tracing::info;

use crate::{
    auth::{CloudAuth, SessionToken},
    cloud::{error::ListError, functions::list_children},
    remote_file::RemoteEntry,
};

/// 云盘根目录的 dirId
pub const ROOT_DIR_ID: &str = "";

/// 递归遍历 `dir_id` 下的整棵目录树，返回扁平的先序列表
///
/// - 父目录总是排在它的子条目之前，子条目的 `level` = 父条目 + 1
/// - 顺序请求，一次只有一个列表请求在途；任一请求失败会中止整个遍历
///
/// 返回 boxed future 是因为 async 递归需要间接层
pub fn walk<'a>(
    auth: &'a CloudAuth,
    token: &'a SessionToken,
    dir_id: &'a str,
    level: u32,
) -> BoxFuture<'a, Result<Vec<RemoteEntry>, ListError>> {
    Box::pin(async move {
        let children = list_children(auth, token, dir_id, level).await?;
        let mut result = Vec::with_capacity(children.len());

        for child in children {
            let sub_dir_id = child.is_dir.then(|| child.meta_id.clone());
            result.push(child);

            if let Some(sub_dir_id) = sub_dir_id {
                let descendants = walk(auth, token, &sub_dir_id, level + 1).await?;
                result.extend(descendants);
            }
        }

        Ok(result)
    })
}

/// 从根目录开始遍历整个云盘
pub async fn walk_from_root(
    auth: &CloudAuth,
    token: &SessionToken,
) -> Result<Vec<RemoteEntry>, ListError> {
    let entries = walk(auth, token, ROOT_DIR_ID, 0).await?;

    let dirs = entries.iter().filter(|e| e.is_dir).count();
    info!(
        "目录遍历完成：共 {} 个条目（目录 {}，文件 {}）",
        entries.len(),
        dirs,
        entries.len() - dirs
    );

    Ok(entries)
}
