//! Shared fixtures for the HTTP tests: in-memory repositories, a stub
//! generator and a token service with a fixed test secret.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use recipe_api::app::AppState;
use recipe_core::domain::entities::{Role, User};
use recipe_core::repositories::{MockCatalogRepository, MockRecipeRepository, MockUserRepository};
use recipe_core::services::{
    AuthGuard, AuthService, AuthServiceConfig, PasswordHasher, RecipeService,
    StubRecipeGenerator, TokenService, TokenServiceConfig,
};
use recipe_shared::{JwtConfig, SessionConfig};

pub const TEST_SECRET: &str = "api-test-secret";

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_COST: u32 = 4;

pub const STRONG_PASSWORD: &str = "Secret1!";

pub type TestState =
    AppState<MockUserRepository, MockCatalogRepository, MockRecipeRepository, StubRecipeGenerator>;

/// Mount every route on a test service backed by `$ctx.state`
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($ctx.state.clone())
                .configure(
                    recipe_api::app::configure::<
                        recipe_core::repositories::MockUserRepository,
                        recipe_core::repositories::MockCatalogRepository,
                        recipe_core::repositories::MockRecipeRepository,
                        recipe_core::services::StubRecipeGenerator,
                    >,
                ),
        )
        .await
    };
}

pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub catalog: Arc<MockCatalogRepository>,
    pub recipes: Arc<MockRecipeRepository>,
    pub generator: Arc<StubRecipeGenerator>,
    pub token_service: Arc<TokenService>,
    pub state: web::Data<TestState>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with(Vec::new(), StubRecipeGenerator::replying("Boil the pasta."))
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self::with(users, StubRecipeGenerator::replying("Boil the pasta."))
    }

    pub fn with(users: Vec<User>, generator: StubRecipeGenerator) -> Self {
        let users = Arc::new(MockUserRepository::with_users(users));
        let catalog = Arc::new(MockCatalogRepository::new());
        let recipes = Arc::new(MockRecipeRepository::new());
        let generator = Arc::new(generator);
        let token_service = token_service();

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            token_service.clone(),
            AuthServiceConfig {
                bcrypt_cost: TEST_COST,
            },
        ));
        let auth_guard = Arc::new(AuthGuard::new(users.clone(), token_service.clone()));
        let recipe_service = Arc::new(RecipeService::new(
            catalog.clone(),
            recipes.clone(),
            generator.clone(),
        ));

        let state = web::Data::new(AppState::new(
            auth_service,
            auth_guard,
            recipe_service,
            SessionConfig::default(),
        ));

        Self {
            users,
            catalog,
            recipes,
            generator,
            token_service,
            state,
        }
    }

    /// `Authorization` header value for `user`
    pub fn bearer(&self, user: &User) -> String {
        let token = self
            .token_service
            .issue(&user.email, &user.id.to_string(), None)
            .unwrap();
        format!("Bearer {}", token)
    }
}

pub fn token_service() -> Arc<TokenService> {
    let config = TokenServiceConfig::from_jwt_config(&JwtConfig::new(TEST_SECRET, "HS256")).unwrap();
    Arc::new(TokenService::new(config))
}

/// An account whose password is [`STRONG_PASSWORD`]
pub fn stored_user(email: &str, role: Role) -> User {
    let hash = PasswordHasher::new(TEST_COST).hash(STRONG_PASSWORD).unwrap();
    User::new("Test User".to_string(), email.to_string(), hash).with_role(role)
}
