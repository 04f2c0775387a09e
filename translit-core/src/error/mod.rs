use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Layout loading error: {0}")]
    Layout(#[from] crate::layout::LayoutError),

    #[error("Invalid conversion table: {0}")]
    Config(String),

    #[error("Session state error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, Error>;
