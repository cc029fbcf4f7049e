//! DocSage Ingest — file text extraction, corpus assembly, chunking.

pub mod chunking;
pub mod corpus;
pub mod docx;
pub mod file;
pub mod pdf;
pub mod tabular;

pub use chunking::{split_chunks, DEFAULT_CHUNK_SIZE};
pub use corpus::{load_corpus, Corpus, FileRecord, NO_READABLE_FILES};
pub use file::FileType;
