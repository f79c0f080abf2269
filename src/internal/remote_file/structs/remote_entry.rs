/// 远程目录树中的一个节点（文件或目录），附带遍历时的层级
///
/// 由目录遍历产生后不再修改；下载阶段用 `Arc` 在任务间共享
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub meta_id: String,
    pub name: String,
    pub absolute_path: String, // 以 "/" 开头，文件路径包含文件名
    pub is_dir: bool,
    pub level: u32, // 根目录下的条目为 0，子条目 = 父条目 + 1
    pub size: Option<u64>,
}

impl RemoteEntry {
    /// 去掉开头 "/" 后的相对路径
    pub fn relative_path(&self) -> &str {
        self.absolute_path.trim_start_matches('/')
    }

    /// 目录列表打印时用的缩进行，每层 4 个空格
    pub fn tree_line(&self) -> String {
        format!("{}{}", "    ".repeat(self.level as usize), self.name)
    }
}
