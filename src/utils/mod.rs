pub mod tempfile;

pub use self::tempfile::TransientDocument;
