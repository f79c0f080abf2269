use core::fmt;
use std::sync::Arc;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::config::CrawlerConfig;
use crate::internal::auth::error::AuthError;
use crate::internal::auth::functions::build_headers::render_headers;

/// 认证结构体
///
/// 该结构体定位
/// - 持有带公共请求头（Cookie、x-yun-csrftoken 等）的http客户端
/// - 持有本次运行的不可变配置，供令牌、列表、下载各环节读取接口地址
#[derive(Clone)]
pub struct CloudAuth {
    pub client: Client,                 // 内部是Arc，不需要特殊处理
    pub config: Arc<CrawlerConfig>,     // 需要跨下载任务共享，所以用Arc
}

impl CloudAuth {
    /// 根据配置中的 Cookie 渲染公共请求头并创建客户端
    pub fn new(config: CrawlerConfig) -> Result<Self, AuthError> {
        let headers = _build_header_map(&config.cookie)?;

        // 不设超时，和浏览器下载行为保持一致
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(AuthError::BuildClient)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for CloudAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudAuth")
            .field("client", &"<Client with hidden cookie>")
            .field("config", &self.config)
            .finish()
    }
}

fn _build_header_map(cookie: &str) -> Result<HeaderMap, AuthError> {
    let mut headers = HeaderMap::new();

    for (name, value) in render_headers(cookie, None) {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            AuthError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut header_value =
            HeaderValue::from_str(&value).map_err(|e| AuthError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;

        if name.eq_ignore_ascii_case("cookie") {
            header_value.set_sensitive(true);
        }

        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
