//! MongoDB persistence adapter

mod document;
mod mongo;

pub use document::TaskDocument;
pub use mongo::MongoTaskRepository;
