/// 下载进度：已写入字节数与响应头 `content-length` 给出的总大小。
///
/// 进度比例可用 [`DownloadProgress::pct`] 获取。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    /// 已写入本地文件的字节数
    pub bytes_done: u64,
    /// 文件总大小（字节），响应没有 `content-length` 时为 `None`
    pub total: Option<u64>,
}

impl DownloadProgress {
    /// 进度百分比（0～100）；总大小未知时返回 `None`，总大小为 0 时返回 `Some(0.0)`。
    pub fn pct(&self) -> Option<f64> {
        self.total.map(|t| {
            if t == 0 {
                0.0
            } else {
                ((self.bytes_done as f64 / t as f64) * 100.0).min(100.0)
            }
        })
    }
}
