//! 压缩包打包器 - 基础设施层
//!
//! 把多份渲染好的文档按名称写入一个 zip，名称与内容原样保留

use crate::error::{AppError, AppResult, ArchiveError};
use crate::infrastructure::docx_writer::RenderedDocument;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 打包能力
pub trait ArchivePackager: Send + Sync {
    /// 打包后的 MIME 类型
    fn content_type(&self) -> &'static str;

    fn package(&self, documents: &[RenderedDocument]) -> AppResult<Vec<u8>>;
}

/// zip 打包器
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager;

impl ArchivePackager for ZipPackager {
    fn content_type(&self) -> &'static str {
        "application/zip"
    }

    fn package(&self, documents: &[RenderedDocument]) -> AppResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for doc in documents {
            let entry = doc.file_name();
            zip.start_file(entry.as_str(), options)
                .map_err(|e| AppError::archive_entry_failed(entry.as_str(), e))?;
            zip.write_all(&doc.bytes)
                .map_err(|e| AppError::archive_entry_failed(entry.as_str(), e))?;
            debug!("已写入 {} ({} 字节)", entry, doc.bytes.len());
        }

        let cursor = zip.finish().map_err(|e| ArchiveError::FinishFailed {
            source: Box::new(e),
        })?;

        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn doc(name: &str, bytes: &[u8]) -> RenderedDocument {
        RenderedDocument {
            name: name.to_string(),
            extension: "docx",
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_entries_keep_names_and_bytes() {
        let bytes = ZipPackager
            .package(&[doc("Set A", b"first"), doc("Set B", b"second")])
            .unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = Vec::new();
        archive
            .by_name("Set B.docx")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"second");
        assert_eq!(archive.by_index(0).unwrap().name(), "Set A.docx");
    }

    #[test]
    fn test_no_documents_gives_empty_archive() {
        let bytes = ZipPackager.package(&[]).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
