use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
