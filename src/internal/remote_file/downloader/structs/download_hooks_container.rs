use std::path::Path;

use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};
use crate::internal::remote_file::structs::remote_entry::RemoteEntry;

use super::download_progress::DownloadProgress;

/// 钩子容器：按注册顺序依次执行多个钩子。
#[derive(Default)]
pub struct DownloadHooksContainer {
    hooks: Vec<Box<dyn DownloadHook>>,
}

impl DownloadHooksContainer {
    /// 添加一个下载钩子；支持多次调用以注册多个钩子，按添加顺序依次执行。
    pub fn add(&mut self, hook: impl DownloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// 任一钩子返回错误即停止，后续钩子不再执行
    pub async fn run_before_start(
        &mut self,
        entry: &RemoteEntry,
    ) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start(entry).await?;
        }
        Ok(())
    }

    pub fn run_on_chunk(&mut self, chunk: &[u8]) {
        for h in self.hooks.iter_mut() {
            h.on_chunk(chunk);
        }
    }

    pub fn run_on_progress(
        &mut self,
        entry: &RemoteEntry,
        progress: &DownloadProgress,
    ) {
        for h in self.hooks.iter_mut() {
            h.on_progress(entry, progress);
        }
    }

    pub async fn run_after_complete(
        &mut self,
        entry: &RemoteEntry,
        saved_to: &Path,
    ) {
        for h in self.hooks.iter_mut() {
            h.after_complete(entry, saved_to).await;
        }
    }
}
