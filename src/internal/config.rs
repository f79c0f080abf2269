//! 运行配置：一次运行内不可变，由 [`crate::auth::CloudAuth`] 持有并传给各个协作者。
//!
//! Cookie 等需要运维手动填写的值放在工作目录的 `.env` 文件中（模板见 `.env.example`），
//! 由 [`CrawlerConfig::from_env`] 读取；测试中直接用 [`CrawlerConfig::new`] 链式构造。

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// 获取 STS 令牌的接口
pub const DEFAULT_TOKEN_URL: &str =
    "https://clouddisk-api.vivo.com.cn/api/webdisk/user/getStsToken.do";

/// 按目录列出元数据的接口
pub const DEFAULT_LIST_URL: &str =
    "https://clouddisk-api.vivo.com.cn/api/webdisk/meta/metaListByDir.do";

/// 文件下载接口（与列表接口不在同一个域名下）
pub const DEFAULT_DOWNLOAD_URL: &str =
    "https://clouddisk-cn09.vivo.com.cn/api/file/webdisk/download.do";

/// 本地镜像根目录
pub const DEFAULT_DOWNLOAD_ROOT: &str = "download";

/// 默认最大并发下载数
pub const DEFAULT_MAX_CONCURRENT_DOWNLOADS: usize = 3;

/// 单次列表请求的条目上限，足够大以避免分页
pub const DEFAULT_PAGE_SIZE: u32 = 10000;

/// `.env.example` 中的占位值，没改过就直接报错
const COOKIE_PLACEHOLDER: &str = "填写你的Cookie";

pub mod env_var_names {
    /// 浏览器登录 yun.vivo.com.cn 后复制的完整 Cookie 字符串（必填）
    pub const COOKIE: &str = "VIVO_COOKIE";
    pub const DOWNLOAD_ROOT: &str = "VIVO_DOWNLOAD_ROOT";
    pub const MAX_CONCURRENT: &str = "VIVO_MAX_CONCURRENT";
    pub const PAGE_SIZE: &str = "VIVO_PAGE_SIZE";
    pub const TOKEN_URL: &str = "VIVO_TOKEN_URL";
    pub const LIST_URL: &str = "VIVO_LIST_URL";
    pub const DOWNLOAD_URL: &str = "VIVO_DOWNLOAD_URL";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("缺少 Cookie，请在 .env 中填写 {0}")]
    MissingCookie(&'static str),

    #[error("加载 .env 失败: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("配置项 {key} 的值无效: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("接口地址格式错误 {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Clone)]
pub struct CrawlerConfig {
    pub cookie: String,
    pub token_url: Url,
    pub list_url: Url,
    pub download_url: Url,
    pub download_root: PathBuf,
    pub max_concurrent_downloads: usize,
    pub page_size: u32,
}

impl CrawlerConfig {
    /// 使用默认接口地址与默认目录创建配置
    pub fn new(cookie: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            cookie: cookie.into(),
            token_url: parse_url(DEFAULT_TOKEN_URL)?,
            list_url: parse_url(DEFAULT_LIST_URL)?,
            download_url: parse_url(DEFAULT_DOWNLOAD_URL)?,
            download_root: PathBuf::from(DEFAULT_DOWNLOAD_ROOT),
            max_concurrent_downloads: DEFAULT_MAX_CONCURRENT_DOWNLOADS,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// 从 `.env` 与进程环境变量读取配置；`.env` 不存在时只读环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 按给定的查找函数组装配置，`from_env` 与测试共用
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        use env_var_names::*;

        let cookie = lookup(COOKIE)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && c != COOKIE_PLACEHOLDER)
            .ok_or(ConfigError::MissingCookie(COOKIE))?;

        let mut config = Self::new(cookie)?;

        if let Some(root) = lookup(DOWNLOAD_ROOT).filter(|v| !v.trim().is_empty()) {
            config.download_root = PathBuf::from(root.trim());
        }
        if let Some(raw) = lookup(MAX_CONCURRENT) {
            let n = parse_number::<usize>(MAX_CONCURRENT, &raw)?;
            config = config.with_max_concurrent_downloads(n);
        }
        if let Some(raw) = lookup(PAGE_SIZE) {
            config.page_size = parse_number::<u32>(PAGE_SIZE, &raw)?;
        }
        if let Some(url) = lookup(TOKEN_URL) {
            config.token_url = parse_url(&url)?;
        }
        if let Some(url) = lookup(LIST_URL) {
            config.list_url = parse_url(&url)?;
        }
        if let Some(url) = lookup(DOWNLOAD_URL) {
            config.download_url = parse_url(&url)?;
        }

        Ok(config)
    }

    /// 一次性替换三个接口地址（测试时指向本地模拟服务）
    pub fn with_endpoints(
        mut self,
        token_url: &str,
        list_url: &str,
        download_url: &str,
    ) -> Result<Self, ConfigError> {
        self.token_url = parse_url(token_url)?;
        self.list_url = parse_url(list_url)?;
        self.download_url = parse_url(download_url)?;
        Ok(self)
    }

    pub fn with_download_root(mut self, root: impl AsRef<Path>) -> Self {
        self.download_root = root.as_ref().to_path_buf();
        self
    }

    /// 设置最大并发下载数，小于 1 时按 1 处理
    pub fn with_max_concurrent_downloads(mut self, n: usize) -> Self {
        self.max_concurrent_downloads = n.max(1);
        self
    }
}

/// 防止debug泄漏 Cookie
impl std::fmt::Debug for CrawlerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrawlerConfig")
            .field("cookie", &"<hidden>")
            .field("token_url", &self.token_url.as_str())
            .field("list_url", &self.list_url.as_str())
            .field("download_url", &self.download_url.as_str())
            .field("download_root", &self.download_root)
            .field("max_concurrent_downloads", &self.max_concurrent_downloads)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn parse_number<T: std::str::FromStr>(
    key: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
