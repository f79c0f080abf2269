use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthError, CloudAuth},
    cloud::{error::ListError, functions::fetch_session_token},
    config::{ConfigError, CrawlerConfig},
    remote_file::DownloadError,
};

use super::download::{download_all, BatchReport};
use super::local::mirror_directories;
use super::remote::walk_from_root;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("获取令牌失败: {0}")]
    Auth(#[from] AuthError),

    #[error("遍历目录失败: {0}")]
    List(#[from] ListError),

    #[error("建立本地目录失败: {0}")]
    Mirror(#[from] DownloadError),

    #[error("{} 个文件下载失败（成功 {}，跳过 {}）", .report.failed.len(), .report.downloaded, .report.skipped)]
    Downloads { report: BatchReport },
}

/// 一次完整运行的结果
#[derive(Debug)]
pub struct CrawlSummary {
    pub entries: usize,
    pub directories: usize,
    pub report: BatchReport,
}

/// 本库主入口：获取令牌 → 遍历整棵目录树 → 建立本地目录 → 批量下载
///
/// 令牌、遍历、建目录任一步失败都会立即返回；批量下载是尽力而为的，
/// 全部文件处理完后若有失败，返回 [`CrawlError::Downloads`]。
pub async fn run(config: CrawlerConfig) -> Result<CrawlSummary, CrawlError> {
    let auth = CloudAuth::new(config)?;
    run_with_auth(&auth).await
}

pub async fn run_with_auth(auth: &CloudAuth) -> Result<CrawlSummary, CrawlError> {
    let token = fetch_session_token(auth).await?;

    let entries = walk_from_root(auth, &token).await?;

    let directories =
        mirror_directories(&auth.config.download_root, &entries).await?;

    let report = download_all(
        auth,
        &token,
        &entries,
        auth.config.max_concurrent_downloads,
    )
    .await;

    if !report.is_success() {
        return Err(CrawlError::Downloads { report });
    }

    info!("全部完成，共 {} 个条目", entries.len());

    Ok(CrawlSummary {
        entries: entries.len(),
        directories,
        report,
    })
}
