//! 目录遍历测试：先序顺序、层级标记、空目录策略与失败中止。

use serde_json::json;

use crate::auth::SessionToken;
use crate::cloud::error::ListError;
use crate::cloud::functions::list_children;
use crate::remote_file::RemoteEntry;
use crate::tests::{MockCloud, TEST_STS_TOKEN};
use crate::{walk, walk_from_root, ROOT_DIR_ID};

fn token() -> SessionToken {
    SessionToken::new(TEST_STS_TOKEN)
}

/// 三层目录树：
///
/// ```text
/// /a.txt
/// /docs/
///     /docs/readme.md
///     /docs/img/
///         /docs/img/logo.png
///     /docs/empty/
/// /z.bin
/// ```
fn sample_tree() -> MockCloud {
    MockCloud::new()
        .file("", "f-a", "/a.txt", b"aaaa")
        .dir("", "d-docs", "/docs")
        .file("d-docs", "f-readme", "/docs/readme.md", b"# hi")
        .dir("d-docs", "d-img", "/docs/img")
        .file("d-img", "f-logo", "/docs/img/logo.png", b"png")
        .dir("d-docs", "d-empty", "/docs/empty")
        .file("", "f-z", "/z.bin", b"z")
}

fn parent_path(entry: &RemoteEntry) -> &str {
    entry
        .absolute_path
        .rsplit_once('/')
        .map(|(parent, _)| parent)
        .unwrap_or("")
}

#[tokio::test]
async fn walk_is_preorder_with_depth_levels() {
    let mock = sample_tree().start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let entries = walk(&auth, &token(), ROOT_DIR_ID, 0).await.unwrap();

    let listing: Vec<(&str, u32, bool)> = entries
        .iter()
        .map(|e| (e.absolute_path.as_str(), e.level, e.is_dir))
        .collect();

    assert_eq!(
        listing,
        vec![
            ("/a.txt", 0, false),
            ("/docs", 0, true),
            ("/docs/readme.md", 1, false),
            ("/docs/img", 1, true),
            ("/docs/img/logo.png", 2, false),
            ("/docs/empty", 1, true),
            ("/z.bin", 0, false),
        ]
    );

    // 一个根目录 + 三个子目录，共 4 次列表请求
    assert_eq!(mock.stats().list_requests(), 4);
}

#[tokio::test]
async fn every_level_is_parent_level_plus_one() {
    let mock = sample_tree().start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let entries = walk_from_root(&auth, &token()).await.unwrap();

    // 条目数等于树中节点数
    assert_eq!(entries.len(), 7);

    for (i, entry) in entries.iter().enumerate() {
        let parent = parent_path(entry);
        if parent.is_empty() {
            assert_eq!(entry.level, 0, "{} 应为根层级", entry.absolute_path);
            continue;
        }

        // 先序：父目录一定出现在子条目之前
        let parent_entry = entries[..i]
            .iter()
            .find(|e| e.is_dir && e.absolute_path == parent)
            .unwrap_or_else(|| panic!("{} 的父目录应排在它前面", entry.absolute_path));
        assert_eq!(entry.level, parent_entry.level + 1);
    }

    let mut paths: Vec<&str> = entries.iter().map(|e| e.absolute_path.as_str()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), entries.len(), "不应出现重复条目");
}

#[tokio::test]
async fn walk_from_subdirectory_starts_at_given_level() {
    let mock = sample_tree().start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let entries = walk(&auth, &token(), "d-docs", 3).await.unwrap();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].level, 3);
    assert_eq!(entries[2].absolute_path, "/docs/img/logo.png");
    assert_eq!(entries[2].level, 4);
}

#[tokio::test]
async fn malformed_listing_is_treated_as_empty_directory() {
    let mock = sample_tree().malformed_dir("d-docs").start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let entries = walk_from_root(&auth, &token()).await.unwrap();

    let paths: Vec<&str> = entries.iter().map(|e| e.absolute_path.as_str()).collect();
    assert_eq!(paths, vec!["/a.txt", "/docs", "/z.bin"]);
}

#[tokio::test]
async fn failing_listing_aborts_the_walk() {
    let mock = sample_tree().failing_dir("d-img").start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let err = walk_from_root(&auth, &token()).await.unwrap_err();

    match err {
        ListError::Status { status, dir_id, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(dir_id, "d-img");
        }
        other => panic!("预期 Status 错误，得到 {other:?}"),
    }

    // 出错后不再继续列出后面的兄弟目录
    let listed = mock.stats().listed_dirs.lock().unwrap().clone();
    assert!(!listed.contains(&"d-empty".to_string()));
}

#[tokio::test]
async fn numeric_ids_and_bad_items_are_handled() {
    let mock = MockCloud::new()
        .raw_meta(
            "",
            json!({
                "metaId": 42,
                "fileName": "n.txt",
                "absolutePath": "/n.txt",
                "dir": false,
                "fileSize": "12"
            }),
        )
        .raw_meta("", json!({ "fileName": "no-id", "dir": false }))
        .raw_meta(
            "",
            json!({
                "metaId": "d1",
                "fileName": "d",
                "absolutePath": "/d",
                "dir": true
            }),
        )
        .start()
        .await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let entries = list_children(&auth, &token(), ROOT_DIR_ID, 0).await.unwrap();

    assert_eq!(entries.len(), 2, "缺少 metaId 的条目应被跳过");
    assert_eq!(entries[0].meta_id, "42");
    assert_eq!(entries[0].size, Some(12));
    assert!(entries[1].is_dir);
    assert_eq!(entries[1].size, None);
}

#[tokio::test]
async fn wrong_token_is_list_error() {
    let mock = sample_tree().start().await;
    let dir = tempfile::tempdir().unwrap();
    let auth = mock.auth(dir.path());

    let err = list_children(&auth, &SessionToken::new("expired"), ROOT_DIR_ID, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ListError::Status { status, .. } if status.as_u16() == 401));
}
