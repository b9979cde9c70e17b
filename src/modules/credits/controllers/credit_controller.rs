use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::credits::models::CreateCreditRequest;
use crate::modules::credits::services::credit_service::CreditService;

/// Query parameter shared by the listing and single-credit endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

/// Create a new credit
/// POST /api/credits
pub async fn create_credit(
    service: web::Data<Arc<CreditService>>,
    request: web::Json<CreateCreditRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = service.save(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(credit))
}

/// List credits for a customer
/// GET /api/credits?customerId={id}
pub async fn list_credits(
    service: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let credits = service.find_all_by_customer_id(query.customer_id).await?;

    Ok(HttpResponse::Ok().json(credits))
}

/// Get a single credit by its generated code
/// GET /api/credits/{creditCode}?customerId={id}
pub async fn get_credit(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<String>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let credit_code = path.into_inner();
    let credit = service
        .find_by_credit_code(query.customer_id, &credit_code)
        .await?;

    Ok(HttpResponse::Ok().json(credit))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/credits")
            .route("", web::post().to(create_credit))
            .route("", web::get().to(list_credits))
            .route("/{creditCode}", web::get().to(get_credit)),
    );
}
