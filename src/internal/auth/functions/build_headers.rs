//! 请求头构建：从 Cookie 中提取 csrf 令牌，并替换请求头模板中的 `{cookie}` / `{csrftoken}` 变量。
//!
//! 这里全是纯函数，不做任何网络或文件访问。

use std::collections::HashMap;

/// Cookie 中存放 csrf 令牌的键名
pub const CSRF_COOKIE_KEY: &str = "vivo_yun_csrftoken";

/// 公共请求头模板，模拟浏览器访问 yun.vivo.com.cn
pub const COMMON_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json, text/plain, */*"),
    (
        "Accept-Language",
        "zh-CN,zh-HK;q=0.9,zh;q=0.8,en-US;q=0.7,en;q=0.6",
    ),
    ("Connection", "keep-alive"),
    ("Cookie", "{cookie}"),
    ("Origin", "https://yun.vivo.com.cn"),
    ("Referer", "https://yun.vivo.com.cn/"),
    ("Sec-Fetch-Dest", "empty"),
    ("Sec-Fetch-Mode", "cors"),
    ("Sec-Fetch-Site", "same-site"),
    (
        "User-Agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    ),
    (
        "sec-ch-ua",
        "Google Chrome;v=131, Chromium;v=131, Not_A Brand;v=24",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "macOS"),
    ("x-yun-csrftoken", "{csrftoken}"),
];

/// 从 Cookie 字符串中提取 `vivo_yun_csrftoken` 的值，找不到时返回空字符串
pub fn extract_csrftoken(cookie: &str) -> String {
    cookie
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == CSRF_COOKIE_KEY)
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// 渲染请求头模板
///
/// 默认变量为 `cookie`（优先取 `variables` 中的覆盖值，否则用 `default_cookie`）
/// 和由该 Cookie 提取出的 `csrftoken`；`variables` 中的其余键值会覆盖默认值。
/// 模板中未知的 `{name}` 原样保留。
pub fn render_headers(
    default_cookie: &str,
    variables: Option<&HashMap<String, String>>,
) -> Vec<(String, String)> {
    let mut vars: HashMap<String, String> = HashMap::new();

    let cookie = variables
        .and_then(|v| v.get("cookie"))
        .map(String::as_str)
        .unwrap_or(default_cookie);

    vars.insert("csrftoken".to_string(), extract_csrftoken(cookie));
    vars.insert("cookie".to_string(), cookie.to_string());

    if let Some(overrides) = variables {
        for (k, v) in overrides {
            vars.insert(k.clone(), v.clone());
        }
    }

    COMMON_HEADERS
        .iter()
        .map(|(name, template)| {
            (name.to_string(), substitute(template, &vars))
        })
        .collect()
}

/// 单遍扫描替换 `{name}`，替换结果不会被再次展开
fn substitute(template: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('}') {
            Some(close) => {
                let name = &after_open[..close];
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
