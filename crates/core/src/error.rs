use thiserror::Error;

#[derive(Error, Debug)]
pub enum LuanavError {
    #[error("tree builder error: {0}")]
    TreeBuild(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LuanavError>;
