//! 闭包钩子：把 `with_xx_hook` 传入的闭包包成 [`DownloadHook`]，只实现对应的那一个阶段。

use std::future::Future;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::remote_file::download::{DownloadHook, HookAbort};
use crate::remote_file::{DownloadProgress, RemoteEntry};

/// 开始前：闭包拿到条目后返回一个独立的 future，可据此决定是否中止
pub(crate) struct BeforeStartFn<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for BeforeStartFn<F>
where
    F: FnMut(&RemoteEntry) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
{
    async fn before_start(&mut self, entry: &RemoteEntry) -> Result<(), HookAbort> {
        let fut = (self.0)(entry);
        fut.await
    }
}

pub(crate) struct ChunkFn<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for ChunkFn<F>
where
    F: FnMut(&[u8]) + Send + Sync + 'static,
{
    fn on_chunk(&mut self, chunk: &[u8]) {
        (self.0)(chunk)
    }
}

pub(crate) struct ProgressFn<F>(pub(crate) F);

#[async_trait]
impl<F> DownloadHook for ProgressFn<F>
where
    F: FnMut(&RemoteEntry, &DownloadProgress) + Send + Sync + 'static,
{
    fn on_progress(&mut self, entry: &RemoteEntry, progress: &DownloadProgress) {
        (self.0)(entry, progress)
    }
}

/// 完成后：闭包拿到的是保存路径的副本，future 不借用下载器内部状态
pub(crate) struct CompleteFn<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> DownloadHook for CompleteFn<F>
where
    F: FnMut(PathBuf) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_complete(&mut self, _entry: &RemoteEntry, saved_to: &Path) {
        let fut = (self.0)(saved_to.to_path_buf());
        fut.await
    }
}
