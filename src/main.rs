//! 命令行入口：不接受任何参数，Cookie 等配置从工作目录的 `.env` 读取。

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vivo_cloud_fs::config::CrawlerConfig;
use vivo_cloud_fs::{CrawlError, CrawlSummary};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 读取配置并执行一次完整的镜像，配置错误与运行错误统一为 [`CrawlError`]
async fn try_main() -> Result<CrawlSummary, CrawlError> {
    let config = CrawlerConfig::from_env()?;
    info!("镜像目录: {}", config.download_root.display());

    vivo_cloud_fs::run(config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match try_main().await {
        Ok(summary) => {
            info!(
                "新下载 {} 个文件，跳过 {} 个已存在文件，共 {} 个目录",
                summary.report.downloaded, summary.report.skipped, summary.directories
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("程序执行出错: {e}");
            ExitCode::FAILURE
        }
    }
}
