use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::{
    auth::{CloudAuth, SessionToken},
    remote_file::{build_downloader, DownloadError, DownloadResult, RemoteEntry},
};

use super::local::mirror_path;

/// 单个文件的下载失败记录
#[derive(Debug)]
pub struct FailedDownload {
    pub entry: Arc<RemoteEntry>,
    pub error: DownloadError,
}

/// 一次批量下载的汇总
#[derive(Debug, Default)]
pub struct BatchReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub bytes: u64,
    pub failed: Vec<FailedDownload>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// 批量下载遍历结果中的所有文件（目录条目会被忽略）
///
/// 每个文件一个任务，用信号量限制同时下载的文件数不超过 `max_concurrent`（小于 1 时按 1 处理）。
/// 尽力而为：单个文件失败只记录到 [`BatchReport::failed`]，不会取消其他文件的下载。
pub async fn download_all(
    auth: &CloudAuth,
    token: &SessionToken,
    entries: &[RemoteEntry],
    max_concurrent: usize,
) -> BatchReport {
    let max_concurrent = max_concurrent.max(1);
    let gate = Arc::new(Semaphore::new(max_concurrent));
    let root = auth.config.download_root.as_path();

    let files: Vec<Arc<RemoteEntry>> = entries
        .iter()
        .filter(|e| !e.is_dir)
        .cloned()
        .map(Arc::new)
        .collect();

    info!(
        "开始下载 {} 个文件，最大并发 {}",
        files.len(),
        max_concurrent
    );

    let handles: Vec<_> = files
        .into_iter()
        .map(|entry| {
            // 路径映射失败的文件不占用并发名额，直接在任务里返回错误
            let downloader = mirror_path(root, &entry).map(|save_path| {
                build_downloader(Arc::clone(&entry), auth, token)
                    .save_to(save_path)
                    .with_console_progress()
            });
            let gate = Arc::clone(&gate);
            let task_entry = Arc::clone(&entry);

            let handle = tokio::spawn(async move {
                let result = async {
                    let downloader = downloader?;
                    let _permit = gate
                        .acquire_owned()
                        .await
                        .map_err(|_| DownloadError::GateClosed)?;
                    downloader.send().await
                }
                .await;

                if let Err(e) = &result {
                    warn!("下载文件 {} 失败: {}", task_entry.absolute_path, e);
                }
                result
            });

            (entry, handle)
        })
        .collect();

    let mut report = BatchReport::default();

    for (entry, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(DownloadError::TaskJoin(join_err)),
        };

        match result {
            Ok(DownloadResult::Skipped) => report.skipped += 1,
            Ok(DownloadResult::Saved { bytes }) => {
                report.downloaded += 1;
                report.bytes += bytes;
            }
            Err(error) => report.failed.push(FailedDownload { entry, error }),
        }
    }

    info!(
        "下载结束：新下载 {}（{} 字节），跳过 {}，失败 {}",
        report.downloaded,
        report.bytes,
        report.skipped,
        report.failed.len()
    );

    report
}
