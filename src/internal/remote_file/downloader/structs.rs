pub mod console_progress;
pub mod download_config;
pub mod download_error;
pub mod download_hooks_container;
pub mod download_progress;
pub mod download_result;
pub mod hook_adapters;
pub mod remote_file_downloader;

// 重导出公共类型
pub use console_progress::ConsoleProgressHook;
pub use download_config::{DownloadConfig, WRITE_CHUNK_SIZE};
pub use download_error::DownloadError;
pub use download_hooks_container::DownloadHooksContainer;
pub use download_progress::DownloadProgress;
pub use download_result::DownloadResult;
pub use remote_file_downloader::{build_downloader, RemoteFileDownloader};
