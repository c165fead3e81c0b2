use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("连接失败: {0}")]
    Connection(String),

    #[error("目录不存在: {0}")]
    DirNotFound(String),

    #[error("文件名匹配规则无效: {0}")]
    Pattern(String),

    #[error("无效的路径: {0}")]
    InvalidPath(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
