use std::io::Write;
use std::path::Path;

use async_trait::async_trait;

use crate::remote_file::download::DownloadHook;
use crate::remote_file::{DownloadProgress, RemoteEntry};

/// 控制台进度输出：`\r下载进度 {文件名}: 12.3%`，完成后换行打印保存路径。
///
/// 百分比只在变化超过 0.1% 时重绘；响应没有 `content-length` 时不打印进度。
#[derive(Debug, Default)]
pub struct ConsoleProgressHook {
    last_permille: Option<u64>,
}

impl ConsoleProgressHook {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DownloadHook for ConsoleProgressHook {
    fn on_progress(&mut self, entry: &RemoteEntry, progress: &DownloadProgress) {
        let Some(pct) = progress.pct() else {
            return;
        };

        let permille = (pct * 10.0) as u64;
        if self.last_permille == Some(permille) {
            return;
        }
        self.last_permille = Some(permille);

        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "\r下载进度 {}: {:.1}%", entry.name, pct);
        let _ = stdout.flush();
    }

    async fn after_complete(&mut self, _entry: &RemoteEntry, saved_to: &Path) {
        println!("\n完成下载: {}", saved_to.display());
    }
}
