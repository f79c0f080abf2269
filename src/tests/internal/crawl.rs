//! 端到端测试：令牌 → 遍历 → 建目录 → 批量下载。

use crate::auth::{AuthError, CloudAuth, SessionToken};
use crate::config::{env_var_names, ConfigError};
use crate::tests::{pattern_bytes, MockCloud, TEST_STS_TOKEN};
use crate::{run, run_with_auth, walk_from_root, CrawlError};

fn scenario() -> MockCloud {
    MockCloud::new()
        .file("", "f-a", "/a.txt", b"0123456789")
        .dir("", "d-sub", "/sub")
        .file("d-sub", "f-b", "/sub/b.txt", &pattern_bytes(20))
}

#[tokio::test]
async fn mirrors_the_whole_tree() {
    let mock = scenario().start().await;
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("download");
    let auth = mock.auth(&root);

    let summary = run_with_auth(&auth).await.unwrap();

    assert_eq!(summary.entries, 3);
    assert_eq!(summary.directories, 1);
    assert_eq!(summary.report.downloaded, 2);
    assert_eq!(summary.report.bytes, 30);

    assert!(root.join("sub").is_dir());
    assert_eq!(std::fs::read(root.join("a.txt")).unwrap(), b"0123456789");
    assert_eq!(std::fs::read(root.join("sub/b.txt")).unwrap(), pattern_bytes(20));

    assert_eq!(mock.stats().token_requests(), 1);
    assert_eq!(mock.stats().list_requests(), 2);
}

#[tokio::test]
async fn rerun_only_skips() {
    let mock = scenario().start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    run_with_auth(&auth).await.unwrap();
    let second = run_with_auth(&auth).await.unwrap();

    assert_eq!(second.report.downloaded, 0);
    assert_eq!(second.report.skipped, 2);
    assert_eq!(mock.stats().download_requests(), 2);
}

#[tokio::test]
async fn run_builds_its_own_client() {
    let mock = scenario().start().await;
    let dir = tempfile::tempdir().unwrap();

    let summary = run(mock.config(dir.path())).await.unwrap();

    assert_eq!(summary.report.downloaded, 2);
    assert!(dir.path().join("a.txt").exists());
}

#[tokio::test]
async fn missing_token_stops_before_listing() {
    let mock = scenario().without_sts_token().start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let err = run_with_auth(&auth).await.unwrap_err();

    assert!(matches!(
        err,
        CrawlError::Auth(AuthError::MissingToken { .. })
    ));
    assert_eq!(mock.stats().list_requests(), 0);
    assert_eq!(mock.stats().download_requests(), 0);
    assert!(!dir.path().join("a.txt").exists());
}

#[tokio::test]
async fn listing_failure_stops_before_downloading() {
    let mock = scenario().failing_dir("d-sub").start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let err = run_with_auth(&auth).await.unwrap_err();

    assert!(matches!(err, CrawlError::List(_)));
    assert_eq!(mock.stats().download_requests(), 0);
}

#[tokio::test]
async fn failed_file_is_reported_after_the_batch() {
    let mock = scenario().failing_file("f-a").start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth: CloudAuth = mock.auth(dir.path());

    let err = run_with_auth(&auth).await.unwrap_err();

    match err {
        CrawlError::Downloads { report } => {
            assert_eq!(report.downloaded, 1);
            assert_eq!(report.failed.len(), 1);
            assert_eq!(report.failed[0].entry.absolute_path, "/a.txt");
        }
        other => panic!("预期 Downloads 错误，得到 {other:?}"),
    }

    // 兄弟文件照常下载完成
    assert!(dir.path().join("sub/b.txt").exists());
    assert!(!dir.path().join("a.txt").exists());
}

#[tokio::test]
async fn tree_listing_indents_four_spaces_per_level() {
    let mock = scenario()
        .dir("d-sub", "d-deep", "/sub/deep")
        .file("d-deep", "f-c", "/sub/deep/c.txt", b"c")
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let entries = walk_from_root(&auth, &SessionToken::new(TEST_STS_TOKEN))
        .await
        .unwrap();
    let lines: Vec<String> = entries.iter().map(|e| e.tree_line()).collect();

    assert_eq!(
        lines,
        vec![
            "a.txt",
            "sub",
            "    b.txt",
            "    deep",
            "        c.txt",
        ]
    );
}

#[test]
fn config_error_converts_into_crawl_error() {
    let err: CrawlError = ConfigError::MissingCookie(env_var_names::COOKIE).into();

    assert!(matches!(err, CrawlError::Config(ConfigError::MissingCookie(_))));
    assert!(err.to_string().contains(env_var_names::COOKIE));
}
