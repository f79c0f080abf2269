/// 单次下载的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    /// 目标文件已存在，没有发起任何请求
    Skipped,
    /// 已保存到本地文件，`bytes` 为实际写入的字节数
    Saved { bytes: u64 },
}
