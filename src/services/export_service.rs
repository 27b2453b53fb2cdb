use std::io::Cursor;

use docx_rs::{Docx, LineSpacing, Paragraph, Run};

use crate::{
    constants::Translations,
    errors::{AppError, AppResult},
    models::domain::{option_label, Question, QuestionType},
};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

// sizes are half-points, spacing is twentieths of a point
const HEADER_SIZE: usize = 28;
const QUESTION_SIZE: usize = 24;
const CHOICE_SIZE: usize = 22;
const SPACER_SIZE: usize = 12;

/// One paragraph of an exported document, before it is laid out as docx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Numbered { number: usize, text: String },
    Choice { label: String, text: String },
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub fn file_name(subject: &str, suffix: &str) -> String {
    format!("{}-{}.docx", subject, suffix)
}

/// Subject header, then every question with its lettered choices.
pub fn question_sheet_blocks(
    subject: &str,
    questions: &[Question],
    translations: &Translations,
) -> Vec<Block> {
    let mut blocks = vec![Block::Heading(format!(
        "{}: {}",
        translations.subject_label, subject
    ))];

    for (idx, question) in questions.iter().enumerate() {
        blocks.push(Block::Numbered {
            number: idx + 1,
            text: question.question.clone(),
        });

        match question.question_type {
            QuestionType::MultipleChoice => {
                for (opt_idx, option) in question.options.iter().flatten().enumerate() {
                    blocks.push(Block::Choice {
                        label: option_label(opt_idx),
                        text: option.clone(),
                    });
                }
            }
            QuestionType::TrueFalse => {
                blocks.push(Block::Choice {
                    label: option_label(0),
                    text: translations.true_label.to_string(),
                });
                blocks.push(Block::Choice {
                    label: option_label(1),
                    text: translations.false_label.to_string(),
                });
            }
            QuestionType::OpenEnded => {}
        }

        blocks.push(Block::Spacer);
    }

    blocks
}

/// Answer key header, then one numbered answer per question in list order.
pub fn answer_key_blocks(questions: &[Question], translations: &Translations) -> Vec<Block> {
    std::iter::once(Block::Heading(format!("{}:", translations.answer_key)))
        .chain(questions.iter().enumerate().map(|(idx, q)| Block::Numbered {
            number: idx + 1,
            text: q.answer.clone(),
        }))
        .collect()
}

pub fn render_docx(blocks: &[Block]) -> AppResult<Vec<u8>> {
    let docx = blocks
        .iter()
        .fold(Docx::new(), |docx, block| docx.add_paragraph(paragraph(block)));

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).map_err(|e| {
        log::error!("Failed to package docx document: {}", e);
        AppError::InternalError(format!("Failed to package document: {}", e))
    })?;

    Ok(buffer.into_inner())
}

fn paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Heading(text) => Paragraph::new()
            .add_run(Run::new().add_text(text).bold().size(HEADER_SIZE))
            .line_spacing(LineSpacing::new().after(400)),
        Block::Numbered { number, text } => Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(format!("{}. ", number))
                    .bold()
                    .size(QUESTION_SIZE),
            )
            .add_run(Run::new().add_text(text).size(QUESTION_SIZE))
            .line_spacing(LineSpacing::new().after(200)),
        Block::Choice { label, text } => Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(format!("{}. {}", label, text))
                    .size(CHOICE_SIZE),
            )
            .line_spacing(LineSpacing::new().after(100)),
        Block::Spacer => Paragraph::new()
            .add_run(Run::new().add_text("").size(SPACER_SIZE))
            .line_spacing(LineSpacing::new().after(300)),
    }
}

pub fn export_question_sheet(
    subject: &str,
    questions: &[Question],
    translations: &Translations,
) -> AppResult<ExportedDocument> {
    let blocks = question_sheet_blocks(subject, questions, translations);
    Ok(ExportedDocument {
        file_name: file_name(subject, translations.questions_file_name),
        bytes: render_docx(&blocks)?,
    })
}

pub fn export_answer_key(
    subject: &str,
    questions: &[Question],
    translations: &Translations,
) -> AppResult<ExportedDocument> {
    let blocks = answer_key_blocks(questions, translations);
    Ok(ExportedDocument {
        file_name: file_name(subject, translations.answer_key_file_name),
        bytes: render_docx(&blocks)?,
    })
}
