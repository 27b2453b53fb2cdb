use actix_web::{
    http::header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue},
    post, web, HttpResponse,
};
use validator::Validate;

use crate::{
    constants::Translations,
    errors::AppError,
    models::dto::ExportRequest,
    services::export_service::{
        export_answer_key, export_question_sheet, ExportedDocument, DOCX_CONTENT_TYPE,
    },
};

#[post("/api/export/questions")]
pub async fn export_questions(request: web::Json<ExportRequest>) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let translations = Translations::for_language(request.language);

    let document = export_question_sheet(&request.subject, &request.questions, translations)?;
    Ok(docx_response(document))
}

#[post("/api/export/answer-key")]
pub async fn export_answers(request: web::Json<ExportRequest>) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let translations = Translations::for_language(request.language);

    let document = export_answer_key(&request.subject, &request.questions, translations)?;
    Ok(docx_response(document))
}

fn docx_response(document: ExportedDocument) -> HttpResponse {
    log::info!(
        "Exported {} ({} bytes)",
        document.file_name,
        document.bytes.len()
    );
    HttpResponse::Ok()
        .content_type(DOCX_CONTENT_TYPE)
        .insert_header(attachment(document.file_name))
        .body(document.bytes)
}

/// `attachment` disposition with an ASCII `filename` and, for names outside
/// ASCII, the exact name as an RFC 5987 `filename*` parameter.
fn attachment(file_name: String) -> ContentDisposition {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut parameters = vec![DispositionParam::Filename(fallback)];
    if !file_name.is_ascii() {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: file_name.into_bytes(),
        }));
    }

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, App};

    use crate::{
        errors::ErrorResponse, models::domain::Language, test_utils::fixtures::mixed_questions,
    };

    fn body(language: Language) -> ExportRequest {
        ExportRequest {
            subject: "Geo".to_string(),
            language,
            questions: mixed_questions(),
        }
    }

    #[actix_web::test]
    async fn test_export_questions_returns_docx_attachment() {
        let app = test::init_service(App::new().service(export_questions)).await;

        let req = test::TestRequest::post()
            .uri("/api/export/questions")
            .set_json(body(Language::En))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("Geo-questions.docx"));

        let bytes = test::read_body(resp).await;
        assert!(bytes.starts_with(b"PK"));
    }

    #[actix_web::test]
    async fn test_export_answer_key_uses_language_file_name() {
        let app = test::init_service(App::new().service(export_answers)).await;

        let req = test::TestRequest::post()
            .uri("/api/export/answer-key")
            .set_json(body(Language::Tr))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.contains("Geo-cevap-anahtari.docx"));
    }

    #[actix_web::test]
    async fn test_export_without_questions_is_rejected() {
        let app = test::init_service(App::new().service(export_answers)).await;

        let mut empty = body(Language::En);
        empty.questions.clear();
        let req = test::TestRequest::post()
            .uri("/api/export/answer-key")
            .set_json(empty)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_export_non_ascii_subject_sets_encoded_file_name() {
        let app = test::init_service(App::new().service(export_questions)).await;

        let mut request = body(Language::Tr);
        request.subject = "Tarih Öğretimi".to_string();
        let req = test::TestRequest::post()
            .uri("/api/export/questions")
            .set_json(request)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(disposition.is_ascii());
        assert!(disposition.contains("filename=\"Tarih __retimi-sorular.docx\""));
        assert!(disposition.contains("filename*=UTF-8''"));
        assert!(disposition.contains("%C3%96"));
    }

    #[actix_web::test]
    async fn test_export_subject_with_newline_is_a_json_bad_request() {
        let app = test::init_service(App::new().service(export_questions)).await;

        let mut request = body(Language::En);
        request.subject = "Math\nII".to_string();
        let req = test::TestRequest::post()
            .uri("/api/export/questions")
            .set_json(request)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert!(error.error.contains("control characters"));
    }

    #[::core::prelude::v1::test]
    fn attachment_keeps_ascii_names_as_plain_filename() {
        let disposition = attachment("Geo-questions.docx".to_string());

        assert_eq!(
            disposition.parameters,
            vec![DispositionParam::Filename("Geo-questions.docx".to_string())]
        );
    }
}
