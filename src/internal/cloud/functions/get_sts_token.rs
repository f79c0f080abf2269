use tracing::{debug, info};

use crate::auth::{AuthError, CloudAuth, SessionToken};
use crate::internal::cloud::raw_json::envelope::{ApiEnvelope, StsTokenData};

use super::timestamp_millis;

/// 网页端固定使用的令牌类型
const TOKEN_TYPE: &str = "2";

/// 用 Cookie 换取本次运行使用的 STS 令牌
///
/// 请求失败、状态码非 2xx、响应不是 JSON 或缺少 `data.stsToken` 都会返回 [`AuthError`]，不做重试
pub async fn fetch_session_token(
    auth: &CloudAuth,
) -> Result<SessionToken, AuthError> {
    let mut url = auth.config.token_url.clone();
    url.query_pairs_mut()
        .append_pair("tokenType", TOKEN_TYPE)
        .append_pair("_t", &timestamp_millis());

    debug!("请求 STS 令牌: {}", auth.config.token_url);

    let res = auth.client.get(url).send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(AuthError::Status { status, body });
    }

    let envelope: ApiEnvelope<StsTokenData> = serde_json::from_str(&body)?;

    let token = envelope
        .data
        .as_ref()
        .and_then(|data| data.sts_token.as_deref())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(SessionToken::new);

    match token {
        Some(token) => {
            info!("已获取 STS 令牌 {:?}", token);
            Ok(token)
        }
        None => Err(AuthError::MissingToken {
            code: envelope.code_text(),
            msg: envelope.msg_text(),
        }),
    }
}
