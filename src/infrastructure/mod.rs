pub mod docx_writer;
pub mod image_resolver;
pub mod zip_packager;

pub use docx_writer::{DocumentWriter, DocxWriter, RenderedDocument};
pub use image_resolver::{DataUrlResolver, ImageResolver, ResolvedImage};
pub use zip_packager::{ArchivePackager, ZipPackager};
