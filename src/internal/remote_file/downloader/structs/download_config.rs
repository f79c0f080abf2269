use std::path::PathBuf;

/// 每次写盘的最大字节数（8KB），进度按此粒度上报
pub const WRITE_CHUNK_SIZE: usize = 8 * 1024;

/// 本次下载的配置。
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub save_path: Option<PathBuf>,
    pub write_chunk_size: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            write_chunk_size: WRITE_CHUNK_SIZE,
        }
    }
}
