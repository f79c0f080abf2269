//! 下载相关 trait：钩子接口，供下载器领域模块调用。
//!
//! 下载器由远程条目创建并执行下载；对外使用入口为 [`crate::remote_file`]。

use std::path::Path;

use async_trait::async_trait;

use crate::internal::remote_file::downloader::structs::DownloadProgress;
use crate::internal::remote_file::structs::remote_entry::RemoteEntry;

/// 钩子执行时请求中止下载时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort {
    pub reason: String,
}

impl HookAbort {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "下载被钩子中止: {}", self.reason)
    }
}

impl std::error::Error for HookAbort {}

/// 下载流程钩子：在「开始前 / 每块数据 / 进度 / 完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用下载器的 `with_xx_hook` 方法传入闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
///
/// 目标文件已存在而跳过下载时，任何钩子都不会被调用。
#[async_trait]
pub trait DownloadHook: Send + Sync {
    /// 创建目标文件之前调用。返回 `Err` 则中止本次下载，不会留下空文件。
    async fn before_start(&mut self, _entry: &RemoteEntry) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 每写入一段数据后调用，`chunk` 不超过 [`crate::remote_file::WRITE_CHUNK_SIZE`]。
    fn on_chunk(&mut self, _chunk: &[u8]) {}

    /// 进度更新。拿到响应头后先以 0 字节调用一次，之后每写入一段调用一次。
    fn on_progress(&mut self, _entry: &RemoteEntry, _progress: &DownloadProgress) {}

    /// 下载成功、文件已落盘后调用。
    async fn after_complete(&mut self, _entry: &RemoteEntry, _saved_to: &Path) {}
}
