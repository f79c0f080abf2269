//! 远程文件下载器
//!
//! 本模块实现了云盘单个文件的下载功能：整文件 GET，流式写入本地。
//!
//! ## 功能特性
//!
//! - **跳过已存在文件**：目标文件已存在时直接返回 [`DownloadResult::Skipped`]，不发任何请求，重复运行是幂等的
//! - **独占写入**：目标文件以 `create_new` 方式打开，不会覆盖别人刚写好的文件
//! - **失败清理**：文件创建之后出现任何传输或写盘错误，都会删除这个不完整的文件再返回错误
//! - **钩子机制**：支持在下载各阶段插入自定义逻辑（开始前、每块数据、进度更新、完成后）
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use vivo_cloud_fs::remote_file::RemoteEntry;
//! # use vivo_cloud_fs::auth::{CloudAuth, SessionToken};
//! # async fn example(entry: RemoteEntry, auth: CloudAuth, token: SessionToken) -> Result<(), Box<dyn std::error::Error>> {
//! let result = entry
//!     .build_downloader(&auth, &token)
//!     .save_to("download/a.txt")
//!     .with_console_progress()
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! 并发控制不在这里做，由 [`crate::download_all`] 在外层用信号量限制同时下载的文件数。

mod single_download;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::internal::auth::structs::cloud_auth::CloudAuth;
use crate::internal::auth::structs::session_token::SessionToken;
use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};
use crate::internal::remote_file::structs::remote_entry::RemoteEntry;

use super::console_progress::ConsoleProgressHook;
use super::download_config::DownloadConfig;
use super::download_error::DownloadError;
use super::download_hooks_container::DownloadHooksContainer;
use super::download_progress::DownloadProgress;
use super::download_result::DownloadResult;
use super::hook_adapters::{BeforeStartFn, ChunkFn, CompleteFn, ProgressFn};
use single_download::run_single_thread_download;

/// 远程文件下载器，不实现Clone，是因为同一个目标路径不应该有两个下载器同时写入。
pub struct RemoteFileDownloader {
    pub(crate) client: Client,
    pub(crate) download_url: Url,
    pub(crate) token: SessionToken,
    pub(crate) entry: Arc<RemoteEntry>,
    pub(crate) config: DownloadConfig,
    pub(crate) hooks: DownloadHooksContainer,
}

/// 由远程条目创建其专属下载器（供 [`RemoteEntry::build_downloader`] 和批量下载使用）。
pub fn build_downloader(
    entry: Arc<RemoteEntry>,
    auth: &CloudAuth,
    token: &SessionToken,
) -> RemoteFileDownloader {
    RemoteFileDownloader {
        client: auth.client.clone(),
        download_url: auth.config.download_url.clone(),
        token: token.clone(),
        entry,
        config: DownloadConfig::default(),
        hooks: Default::default(),
    }
}

impl RemoteEntry {
    /// 创建专属于本远程条目的下载器；可链式配置后调用 [`RemoteFileDownloader::send`] 执行下载。
    pub fn build_downloader(
        &self,
        auth: &CloudAuth,
        token: &SessionToken,
    ) -> RemoteFileDownloader {
        build_downloader(Arc::new(self.clone()), auth, token)
    }
}

impl RemoteFileDownloader {
    /// 设置保存路径；不调用则 `send` 返回 [`DownloadError::NoDestination`]。传空路径表示不保存。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        self.config.save_path = if p.as_os_str().is_empty() {
            None
        } else {
            Some(p.to_path_buf())
        };
        self
    }

    /// 设置单次写盘的最大字节数，小于 1 时按 1 处理。
    pub fn write_chunk_size(mut self, n: usize) -> Self {
        self.config.write_chunk_size = n.max(1);
        self
    }

    /// 开始前钩子，闭包参数为当前条目；返回 `Err(HookAbort)` 会中止本次下载，不会创建文件。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(&RemoteEntry) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(BeforeStartFn(f));
        self
    }

    /// 每写入一段数据调用一次，参数为刚写入文件的字节
    pub fn with_on_chunk_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[u8]) + Send + Sync + 'static,
    {
        self.hooks.add(ChunkFn(f));
        self
    }

    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&RemoteEntry, &DownloadProgress) + Send + Sync + 'static,
    {
        self.hooks.add(ProgressFn(f));
        self
    }

    /// 下载成功后调用，闭包参数为保存路径
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(PathBuf) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(CompleteFn(f));
        self
    }

    /// 注册实现了 [`DownloadHook`] 的完整钩子，可同时处理多个阶段
    pub fn with_hook(mut self, hook: impl DownloadHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 在控制台打印下载百分比与完成提示。
    pub fn with_console_progress(self) -> Self {
        self.with_hook(ConsoleProgressHook::new())
    }

    /// 执行下载。目标已存在返回 Skipped，否则返回 Saved。
    pub async fn send(self) -> Result<DownloadResult, DownloadError> {
        let mut url = self.download_url;
        url.query_pairs_mut()
            .append_pair("stsToken", self.token.as_str())
            .append_pair("metaId", &self.entry.meta_id);

        debug!(
            "下载 metaId={} -> {:?}",
            self.entry.meta_id, self.config.save_path
        );

        run_single_thread_download(
            &self.client,
            url,
            &self.entry,
            self.config,
            self.hooks,
        )
        .await
    }
}
