pub mod abnf;
mod document;

pub use document::Document;
