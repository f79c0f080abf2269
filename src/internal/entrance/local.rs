use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::remote_file::{DownloadError, RemoteEntry};

/// 计算远程条目在本地镜像根目录下的路径
///
/// - 目录：`root/<absolute_path>`
/// - 文件：`root/<absolute_path 的父目录>/<name>`
///
/// 路径中出现 `..`、根目录或盘符前缀时拒绝映射，防止写到镜像根目录之外
pub fn mirror_path(root: &Path, entry: &RemoteEntry) -> Result<PathBuf, DownloadError> {
    let relative = Path::new(entry.relative_path());
    let mut path = root.to_path_buf();

    if entry.is_dir {
        push_normal_components(&mut path, relative, &entry.absolute_path)?;
        return Ok(path);
    }

    if let Some(parent) = relative.parent() {
        push_normal_components(&mut path, parent, &entry.absolute_path)?;
    }

    let mut name_components = Path::new(&entry.name).components();
    match (name_components.next(), name_components.next()) {
        (Some(Component::Normal(name)), None) => path.push(name),
        _ => return Err(DownloadError::UnsafePath(entry.name.clone())),
    }

    Ok(path)
}

fn push_normal_components(
    base: &mut PathBuf,
    relative: &Path,
    original: &str,
) -> Result<(), DownloadError> {
    for component in relative.components() {
        match component {
            Component::Normal(part) => base.push(part),
            Component::CurDir => {}
            _ => return Err(DownloadError::UnsafePath(original.to_string())),
        }
    }
    Ok(())
}

/// 按遍历结果在本地建立目录结构，并打印带缩进的目录树
///
/// 只创建目录，不下载文件；返回创建（或已存在）的目录数。路径不安全的目录只告警跳过。
pub async fn mirror_directories(
    root: &Path,
    entries: &[RemoteEntry],
) -> Result<usize, DownloadError> {
    let mut created = 0;

    for entry in entries {
        println!("{}", entry.tree_line());

        if !entry.is_dir {
            continue;
        }

        let dir = match mirror_path(root, entry) {
            Ok(dir) => dir,
            Err(e) => {
                warn!("跳过目录 {}: {}", entry.absolute_path, e);
                continue;
            }
        };

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(DownloadError::CreateDir)?;
        created += 1;
    }

    info!("本地目录结构已建立：{} 个目录，根目录 {}", created, root.display());

    Ok(created)
}
