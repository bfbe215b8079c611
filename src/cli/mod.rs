pub mod extract_doc;
pub mod extract_docx;
pub mod init_config;
pub mod patch;

pub use extract_doc::ExtractDocArgs;
pub use extract_docx::ExtractDocxArgs;
pub use patch::PatchArgs;
