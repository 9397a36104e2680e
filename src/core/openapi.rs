use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::art_pieces::{dtos as art_pieces_dtos, handlers as art_pieces_handlers};
use crate::features::bookings::{
    dtos as bookings_dtos, handlers as bookings_handlers, models as bookings_models,
};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::clients::{dtos as clients_dtos, handlers as clients_handlers};
use crate::features::faqs::{dtos as faqs_dtos, handlers as faqs_handlers};
use crate::features::gallery::{
    dtos as gallery_dtos, handlers as gallery_handlers, models as gallery_models,
};
use crate::features::recommendations::{
    dtos as recommendations_dtos, handlers as recommendations_handlers,
};
use crate::features::testimonials::{dtos as testimonials_dtos, handlers as testimonials_handlers};
use crate::features::workshops::{dtos as workshops_dtos, handlers as workshops_handlers};
use crate::shared::types::{ApiResponse, Meta, ReorderDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Bookings
        bookings_handlers::create_booking,
        bookings_handlers::list_bookings,
        bookings_handlers::get_booking,
        bookings_handlers::update_booking_status,
        bookings_handlers::delete_booking,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::get_category_page,
        categories_handlers::get_category_gallery,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Gallery
        gallery_handlers::list_gallery_assets,
        gallery_handlers::get_gallery_asset,
        gallery_handlers::create_gallery_asset,
        gallery_handlers::update_gallery_asset,
        gallery_handlers::delete_gallery_asset,
        gallery_handlers::bulk_insert_gallery_assets,
        gallery_handlers::reorder_gallery_assets,
        // Art pieces
        art_pieces_handlers::list_art_pieces,
        art_pieces_handlers::get_art_piece,
        art_pieces_handlers::create_art_piece,
        art_pieces_handlers::update_art_piece,
        art_pieces_handlers::delete_art_piece,
        art_pieces_handlers::bulk_insert_art_pieces,
        art_pieces_handlers::reorder_art_pieces,
        // Clients
        clients_handlers::list_clients,
        clients_handlers::get_client,
        clients_handlers::create_client,
        clients_handlers::update_client,
        clients_handlers::delete_client,
        // FAQs
        faqs_handlers::list_faqs,
        faqs_handlers::get_faq,
        faqs_handlers::create_faq,
        faqs_handlers::update_faq,
        faqs_handlers::delete_faq,
        faqs_handlers::bulk_insert_faqs,
        // Testimonials
        testimonials_handlers::list_testimonials,
        testimonials_handlers::get_testimonial,
        testimonials_handlers::create_testimonial,
        testimonials_handlers::update_testimonial,
        testimonials_handlers::delete_testimonial,
        testimonials_handlers::bulk_insert_testimonials,
        testimonials_handlers::reorder_testimonials,
        // Workshops
        workshops_handlers::list_workshops,
        workshops_handlers::get_workshop,
        workshops_handlers::create_workshop,
        workshops_handlers::update_workshop,
        workshops_handlers::delete_workshop,
        // Recommendations
        recommendations_handlers::create_recommendation,
    ),
    components(
        schemas(
            // Shared
            Meta,
            ReorderDto,
            // Bookings
            bookings_models::BookingStatus,
            bookings_dtos::CreateBookingDto,
            bookings_dtos::UpdateBookingStatusDto,
            bookings_dtos::BookingResponseDto,
            ApiResponse<Vec<bookings_dtos::BookingResponseDto>>,
            ApiResponse<bookings_dtos::BookingResponseDto>,
            // Categories
            categories_dtos::CategorySummaryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryPageDto,
            categories_dtos::CategoryGalleryDto,
            ApiResponse<Vec<categories_dtos::CategorySummaryDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::CategoryPageDto>,
            ApiResponse<categories_dtos::CategoryGalleryDto>,
            // Gallery
            gallery_models::AssetStatus,
            gallery_dtos::GalleryAssetResponseDto,
            gallery_dtos::GalleryAssetSeed,
            gallery_dtos::BulkInsertGalleryDto,
            ApiResponse<Vec<gallery_dtos::GalleryAssetResponseDto>>,
            ApiResponse<gallery_dtos::GalleryAssetResponseDto>,
            // Art pieces
            art_pieces_dtos::UpsertArtPieceDto,
            art_pieces_dtos::BulkInsertArtPiecesDto,
            art_pieces_dtos::ArtPieceResponseDto,
            ApiResponse<Vec<art_pieces_dtos::ArtPieceResponseDto>>,
            ApiResponse<art_pieces_dtos::ArtPieceResponseDto>,
            // Clients
            clients_dtos::UpsertClientDto,
            clients_dtos::ClientResponseDto,
            ApiResponse<Vec<clients_dtos::ClientResponseDto>>,
            ApiResponse<clients_dtos::ClientResponseDto>,
            // FAQs
            faqs_dtos::UpsertFaqDto,
            faqs_dtos::BulkInsertFaqsDto,
            faqs_dtos::FaqResponseDto,
            ApiResponse<Vec<faqs_dtos::FaqResponseDto>>,
            ApiResponse<faqs_dtos::FaqResponseDto>,
            // Testimonials
            testimonials_dtos::UpsertTestimonialDto,
            testimonials_dtos::BulkInsertTestimonialsDto,
            testimonials_dtos::TestimonialResponseDto,
            ApiResponse<Vec<testimonials_dtos::TestimonialResponseDto>>,
            ApiResponse<testimonials_dtos::TestimonialResponseDto>,
            // Workshops
            workshops_dtos::UpsertWorkshopDto,
            workshops_dtos::WorkshopResponseDto,
            ApiResponse<Vec<workshops_dtos::WorkshopResponseDto>>,
            ApiResponse<workshops_dtos::WorkshopResponseDto>,
            // Recommendations
            recommendations_dtos::RecommendationRequestDto,
            recommendations_dtos::RecommendationDto,
            ApiResponse<recommendations_dtos::RecommendationDto>,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "bookings", description = "Booking funnel and admin booking surface"),
        (name = "categories", description = "Category documents and rendered pages"),
        (name = "gallery", description = "Studio gallery assets"),
        (name = "art-pieces", description = "Art piece catalog"),
        (name = "clients", description = "Client book"),
        (name = "faqs", description = "Frequently asked questions"),
        (name = "testimonials", description = "Client testimonials"),
        (name = "workshops", description = "Studio workshops"),
        (name = "recommendations", description = "AI style recommendations"),
    )
)]
pub struct ApiDoc;

/// Registers the admin bearer-token scheme referenced by protected paths.
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("Opaque")
                        .build(),
                ),
            );
        }
    }
}

/// Applies the configured title/version/description to the generated doc.
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
