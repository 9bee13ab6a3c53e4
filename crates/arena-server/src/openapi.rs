use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arena API",
        version = "0.2.0",
        description = "REST API for a multi-sport event site: accounts, refresh-token auth, \
                       events, editions, trials, and editorial content."
    ),
    paths(
        crate::routes::signup,
        crate::routes::signin,
        crate::routes::refresh_token,
        crate::routes::me,
        crate::routes::list_events,
        crate::routes::get_event,
        crate::routes::create_event,
        crate::routes::update_event,
        crate::routes::delete_event,
        crate::routes::list_editions,
        crate::routes::get_edition,
        crate::routes::create_edition,
        crate::routes::update_edition,
        crate::routes::delete_edition,
        crate::routes::list_trials,
        crate::routes::get_trial,
        crate::routes::create_trial,
        crate::routes::update_trial,
        crate::routes::delete_trial,
        crate::routes::list_contents,
        crate::routes::get_content,
        crate::routes::get_content_by_slug,
        crate::routes::create_content,
        crate::routes::update_content,
        crate::routes::delete_content,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::SignupRequest,
        crate::dto::SigninRequest,
        crate::dto::TokenResponse,
        crate::dto::RefreshTokenRequest,
        crate::dto::UserResponse,
        crate::dto::EventRequest,
        crate::dto::EventResponse,
        crate::dto::EventListResponse,
        crate::dto::EditionRequest,
        crate::dto::EditionResponse,
        crate::dto::EditionListResponse,
        crate::dto::TrialRequest,
        crate::dto::TrialResponse,
        crate::dto::TrialListResponse,
        crate::dto::ContentRequest,
        crate::dto::ContentResponse,
        crate::dto::ContentListResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Registration, sign-in, and refresh tokens"),
        (name = "users", description = "Account profile"),
        (name = "events", description = "Event management"),
        (name = "editions", description = "Yearly editions of events"),
        (name = "trials", description = "Races within an edition"),
        (name = "contents", description = "Editorial pages"),
        (name = "system", description = "Health and system status"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Adds Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "Access token obtained from /v1/auth/signin or /v1/auth/refreshtoken.",
                        ))
                        .build(),
                ),
            );
        }
    }
}
