use guidebook_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A video result without a video id cannot be played.
    #[error("Video \"{title}\" has no video id")]
    MissingVideoId { title: String },

    /// A file result without a URL cannot be opened.
    #[error("File \"{title}\" has no url")]
    MissingFileUrl { title: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
