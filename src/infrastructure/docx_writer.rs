//! Word 文档生成器 - 基础设施层
//!
//! 把一套试卷渲染为 .docx：标题、题目与选项、分页、答案表

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::image_resolver::{DataUrlResolver, ImageResolver};
use crate::models::{ProcessedQuestion, QuestionSet};
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Pic, Run, Start, Style, StyleType, Table,
    TableCell, TableRow,
};
use std::io::Cursor;
use tracing::debug;

/// 套卷标题样式
pub const TITLE_STYLE: &str = "Title";
/// 答案表标题样式
pub const HEADING_STYLE: &str = "Heading1";
/// 选项列表样式
pub const LIST_BULLET_STYLE: &str = "ListBullet";
/// 选项列表使用的编号定义；避开 docx-rs 自带的默认编号
const BULLET_NUMBERING_ID: usize = 2;

/// 渲染完成的文档
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// 文档名（套卷名称）
    pub name: String,
    /// 扩展名，不含点
    pub extension: &'static str,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// 压缩包中的条目名：`{name}.{extension}`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// 文档生成能力
pub trait DocumentWriter: Send + Sync {
    fn write(&self, set: &QuestionSet) -> AppResult<RenderedDocument>;
}

/// .docx 文档生成器
///
/// 图片解析失败时跳过该图片，继续渲染
pub struct DocxWriter<R = DataUrlResolver> {
    resolver: R,
    question_image_width_inches: f64,
    option_image_width_inches: f64,
}

impl DocxWriter<DataUrlResolver> {
    /// 使用配置中的图片宽度创建
    pub fn new(config: &Config) -> Self {
        Self::with_resolver(
            DataUrlResolver,
            config.question_image_width_inches,
            config.option_image_width_inches,
        )
    }
}

impl<R: ImageResolver> DocxWriter<R> {
    /// 使用自定义图片解析器创建
    pub fn with_resolver(
        resolver: R,
        question_image_width_inches: f64,
        option_image_width_inches: f64,
    ) -> Self {
        Self {
            resolver,
            question_image_width_inches,
            option_image_width_inches,
        }
    }

    fn picture(&self, reference: Option<&str>, width_inches: f64) -> Option<Paragraph> {
        let image = self.resolver.resolve(reference?)?;
        let (width, height) = image.size_emu(width_inches);
        let pic = Pic::new(&image.png).size(width, height);
        Some(Paragraph::new().add_run(Run::new().add_image(pic)))
    }

    fn add_question(&self, mut docx: Docx, question: &ProcessedQuestion) -> Docx {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(format!(
                        "{}. {}",
                        question.question_number, question.question_text
                    ))
                    .bold(),
            ),
        );

        if let Some(pic) = self.picture(
            question.question_image.as_deref(),
            self.question_image_width_inches,
        ) {
            docx = docx.add_paragraph(pic);
        }

        for option in &question.options {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .style(LIST_BULLET_STYLE)
                    .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
                    .add_run(Run::new().add_text(format!("{}) {}", option.letter, option.text))),
            );

            if let Some(pic) =
                self.picture(option.image.as_deref(), self.option_image_width_inches)
            {
                docx = docx.add_paragraph(pic);
            }
        }

        // 题与题之间空一行
        docx.add_paragraph(Paragraph::new())
    }

    /// 空白文档，带标题、列表样式与圆点编号
    fn styled_document() -> Docx {
        Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Title")
                    .size(56)
                    .bold(),
            )
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            )
            .add_style(Style::new(LIST_BULLET_STYLE, StyleType::Paragraph).name("List Bullet"))
            .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                ),
            ))
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
    }

    fn answer_key_table(set: &QuestionSet) -> Table {
        let cell = |text: String| {
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
        };

        let mut rows = vec![TableRow::new(vec![
            cell("Question No".to_string()),
            cell("Correct Option".to_string()),
        ])];
        rows.extend(set.answer_key().map(|(number, letter)| {
            TableRow::new(vec![cell(number.to_string()), cell(letter.to_string())])
        }));

        Table::new(rows)
    }
}

impl<R: ImageResolver> DocumentWriter for DocxWriter<R> {
    fn write(&self, set: &QuestionSet) -> AppResult<RenderedDocument> {
        let mut docx = Self::styled_document().add_paragraph(
            Paragraph::new()
                .style(TITLE_STYLE)
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(set.set_name.as_str())),
        );

        for question in &set.questions {
            docx = self.add_question(docx, question);
        }

        docx = docx
            .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page)))
            .add_paragraph(
                Paragraph::new()
                    .style(HEADING_STYLE)
                    .add_run(Run::new().add_text(format!("Answer Key - {}", set.set_name))),
            )
            .add_table(Self::answer_key_table(set));

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| AppError::render_failed(set.set_name.as_str(), e))?;

        let bytes = buf.into_inner();
        debug!("{} 渲染完成，{} 字节", set.set_name, bytes.len());

        Ok(RenderedDocument {
            name: set.set_name.clone(),
            extension: "docx",
            bytes,
        })
    }
}
