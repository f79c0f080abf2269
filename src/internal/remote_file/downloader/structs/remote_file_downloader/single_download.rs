//! 单线程整文件下载。

use std::path::Path;

use futures_util::StreamExt;
use reqwest::header::CONTENT_LENGTH;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use url::Url;

use crate::internal::remote_file::downloader::structs::{
    DownloadConfig, DownloadHooksContainer, DownloadProgress, DownloadResult,
};
use crate::internal::remote_file::structs::remote_entry::RemoteEntry;

use super::DownloadError;

/// 单线程下载：已存在则跳过，否则整文件 GET，流式写入并更新进度。
pub(super) async fn run_single_thread_download(
    client: &reqwest::Client,
    url: Url,
    entry: &RemoteEntry,
    config: DownloadConfig,
    mut hooks: DownloadHooksContainer,
) -> Result<DownloadResult, DownloadError> {
    if entry.is_dir {
        return Err(DownloadError::IsDir);
    }

    let save_path = config.save_path.ok_or(DownloadError::NoDestination)?;

    let exists = tokio::fs::try_exists(&save_path)
        .await
        .map_err(DownloadError::ProbeFile)?;
    if exists {
        info!("文件已存在，跳过下载: {}", save_path.display());
        return Ok(DownloadResult::Skipped);
    }

    hooks.run_before_start(entry).await?;

    if let Some(parent) = save_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(DownloadError::CreateDir)?;
    }

    // create_new 保证只写自己创建的文件，后面失败时删除也不会误删
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&save_path)
        .await
        .map_err(DownloadError::CreateFile)?;

    let streamed = stream_into_file(
        client,
        url,
        entry,
        file,
        config.write_chunk_size,
        &mut hooks,
    )
    .await;

    match streamed {
        Ok(bytes) => {
            hooks.run_after_complete(entry, &save_path).await;
            Ok(DownloadResult::Saved { bytes })
        }
        Err(e) => {
            remove_partial(&save_path).await;
            Err(e)
        }
    }
}

async fn stream_into_file(
    client: &reqwest::Client,
    url: Url,
    entry: &RemoteEntry,
    mut file: File,
    write_chunk_size: usize,
    hooks: &mut DownloadHooksContainer,
) -> Result<u64, DownloadError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DownloadError::Status(status));
    }

    let total = resp
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let mut progress = DownloadProgress {
        bytes_done: 0,
        total,
    };
    hooks.run_on_progress(entry, &progress);

    let mut stream = resp.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;

        for piece in chunk.chunks(write_chunk_size.max(1)) {
            file.write_all(piece).await.map_err(DownloadError::WriteFile)?;
            progress.bytes_done += piece.len() as u64;

            hooks.run_on_chunk(piece);
            hooks.run_on_progress(entry, &progress);
        }
    }

    file.flush().await.map_err(DownloadError::FlushFile)?;

    Ok(progress.bytes_done)
}

/// 删除不完整的文件，避免下次运行时被当成已下载而跳过
async fn remove_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("删除不完整的文件失败 {}: {}", path.display(), e);
        }
    }
}
