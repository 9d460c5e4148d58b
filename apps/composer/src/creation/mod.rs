// Document creation: multipart intake → layout → rendering → PDF download.
// Layout and rendering are CPU-bound and run inside tokio::task::spawn_blocking.

pub mod assembler;
pub mod handlers;
pub mod request;

pub use assembler::assemble;
pub use request::CompositionRequest;
