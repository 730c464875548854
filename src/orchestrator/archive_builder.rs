//! 试卷打包器 - 编排层
//!
//! 逐套渲染文档，再整体打包为一个压缩包。
//! 任何一套渲染失败，整个请求失败，不返回部分结果。

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{
    ArchivePackager, DocumentWriter, DocxWriter, RenderedDocument, ZipPackager,
};
use crate::models::QuestionSet;
use tracing::info;

/// 渲染并打包
pub struct ArchiveBuilder {
    writer: Box<dyn DocumentWriter>,
    packager: Box<dyn ArchivePackager>,
}

impl ArchiveBuilder {
    /// 使用 .docx + zip 创建
    pub fn new(config: &Config) -> Self {
        Self::with_parts(Box::new(DocxWriter::new(config)), Box::new(ZipPackager))
    }

    /// 使用自定义生成器与打包器创建
    pub fn with_parts(writer: Box<dyn DocumentWriter>, packager: Box<dyn ArchivePackager>) -> Self {
        Self { writer, packager }
    }

    /// 打包后的 MIME 类型
    pub fn content_type(&self) -> &'static str {
        self.packager.content_type()
    }

    /// 渲染所有试卷并打包
    pub fn build(&self, sets: &[QuestionSet]) -> AppResult<Vec<u8>> {
        let documents = sets
            .iter()
            .map(|set| self.writer.write(set))
            .collect::<AppResult<Vec<RenderedDocument>>>()?;

        let archive = self.packager.package(&documents)?;
        info!(
            "📦 打包完成: {} 份文档, {} 字节",
            documents.len(),
            archive.len()
        );

        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ProcessedOption, ProcessedQuestion};
    use std::io::Cursor;

    fn set(name: &str) -> QuestionSet {
        QuestionSet {
            set_name: name.to_string(),
            questions: vec![ProcessedQuestion {
                question_number: 1,
                question_text: "Q".to_string(),
                question_image: None,
                options: vec![ProcessedOption {
                    letter: "a".to_string(),
                    text: "A".to_string(),
                    image: None,
                }],
                correct_answer: "a".to_string(),
            }],
        }
    }

    #[test]
    fn test_one_entry_per_set() {
        let builder = ArchiveBuilder::new(&Config::default());
        let bytes = builder.build(&[set("Set A"), set("Set B"), set("Set C")]).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["Set A.docx", "Set B.docx", "Set C.docx"]);
        assert_eq!(builder.content_type(), "application/zip");
    }

    struct FailingWriter;

    impl DocumentWriter for FailingWriter {
        fn write(&self, set: &QuestionSet) -> AppResult<RenderedDocument> {
            Err(AppError::render_failed(
                set.set_name.as_str(),
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ))
        }
    }

    #[test]
    fn test_render_failure_fails_whole_archive() {
        let builder = ArchiveBuilder::with_parts(Box::new(FailingWriter), Box::new(ZipPackager));
        let err = builder.build(&[set("Set A")]).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }
}
