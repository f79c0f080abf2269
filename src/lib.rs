/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::crawl::*;
pub use internal::entrance::download::*;
pub use internal::entrance::local::*;
pub use internal::entrance::remote::*;

pub mod config {
    use crate::internal;
    pub use internal::config::*;
}

pub mod auth {
    use crate::internal;
    pub use internal::auth::error::AuthError;
    pub use internal::auth::functions::build_headers::*;
    pub use internal::auth::structs::cloud_auth::CloudAuth;
    pub use internal::auth::structs::session_token::SessionToken;
}

/// 对外提供云盘接口的基础访问能力，不能限制死在入口函数中，以防有人自己要用
pub mod cloud {
    pub mod functions {
        use crate::internal;
        pub use internal::cloud::functions::get_sts_token::*;
        pub use internal::cloud::functions::list_children::*;
    }

    pub mod error {
        pub use crate::internal::cloud::error::*;
    }

    pub mod traits {
        pub use crate::internal::cloud::raw_json::impl_meta_list::*;
    }

    pub mod structs {
        pub use crate::internal::cloud::raw_json::envelope::*;
        pub use crate::internal::cloud::raw_json::meta_list::*;
    }
}

pub mod remote_file {
    use crate::internal;
    // 结构体模型
    pub use internal::remote_file::structs::remote_entry::*;
    // 下载器：类型与入口（以 lib 为中心，此处统一导出）
    pub use internal::remote_file::downloader::structs::*;
    pub use internal::remote_file::downloader::traits::*;
}
