//! 下载相关错误类型。

use thiserror::Error;

use crate::internal::remote_file::downloader::traits::download::HookAbort;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("下载状态异常: {0}")]
    Status(reqwest::StatusCode),

    #[error("检查本地文件失败: {0}")]
    ProbeFile(std::io::Error),

    #[error("创建目录失败: {0}")]
    CreateDir(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("刷新文件失败: {0}")]
    FlushFile(std::io::Error),

    #[error("仅支持文件下载，当前为目录")]
    IsDir,

    #[error("未设置保存路径")]
    NoDestination,

    #[error("远程路径不允许映射到本地: {0}")]
    UnsafePath(String),

    #[error("并发闸门已关闭")]
    GateClosed,

    #[error("下载任务异常退出: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// 钩子在 before_start 中返回错误，中止下载。
    #[error("{0}")]
    HookAbort(#[from] HookAbort),
}
