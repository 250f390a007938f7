use crate::api;
use crate::domain;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::collection::list_collections,
        api::collection::get_collection,
        api::collection::create_collection,
        api::collection::update_collection,
        api::collection::delete_collection,
        api::quotation::list_quotations,
        api::quotation::get_quotation,
        api::quotation::create_quotation,
        api::quotation::update_quotation,
        api::quotation::delete_quotation,
    ),
    components(
        schemas(
            domain::Collection,
            domain::CollectionDetails,
            domain::CollectionSummary,
            domain::Quotation,
            domain::QuotationDetails,
            domain::FieldError,
            api::collection::CreateCollectionRequest,
            api::collection::UpdateCollectionRequest,
            api::quotation::CreateQuotationRequest,
            api::quotation::UpdateQuotationRequest,
            api::ErrorResponse,
            api::ValidationErrorResponse,
            api::MessageResponse,
        )
    ),
    tags(
        (name = "colecao", description = "Collections of quotations"),
        (name = "citacao", description = "Quotations"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
