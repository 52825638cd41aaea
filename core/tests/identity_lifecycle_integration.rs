//! Integration tests for the account lifecycle: register, log in, present
//! the token, get gated by role

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use jsonwebtoken::Algorithm;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use recipe_core::{
        AuthError, AuthGuard, AuthService, AuthServiceConfig, DomainError, ErrorKind,
        RegistrationRequest, Role, TokenService, TokenServiceConfig, User, UserRepository,
    };

    // Store keyed by email so role changes can be simulated in place
    #[derive(Default)]
    struct InMemoryUsers {
        users: RwLock<HashMap<String, User>>,
    }

    impl InMemoryUsers {
        async fn promote(&self, email: &str) {
            if let Some(user) = self.users.write().await.get_mut(email) {
                user.role = Role::Admin;
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUsers {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
            Ok(self.users.read().await.get(email).cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .read()
                .await
                .values()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn create(&self, user: User) -> Result<User, DomainError> {
            let mut users = self.users.write().await;
            if users.contains_key(&user.email) {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            users.insert(user.email.clone(), user.clone());
            Ok(user)
        }
    }

    struct Fixture {
        store: Arc<InMemoryUsers>,
        auth: AuthService<InMemoryUsers>,
        guard: AuthGuard<InMemoryUsers>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryUsers::default());
        let tokens = Arc::new(TokenService::new(
            TokenServiceConfig::new("lifecycle-secret", Algorithm::HS256).unwrap(),
        ));
        Fixture {
            auth: AuthService::new(
                store.clone(),
                tokens.clone(),
                AuthServiceConfig { bcrypt_cost: 4 },
            ),
            guard: AuthGuard::new(store.clone(), tokens),
            store,
        }
    }

    async fn register(fixture: &Fixture, email: &str) -> User {
        fixture
            .auth
            .register(RegistrationRequest {
                email: email.to_string(),
                username: "cook".to_string(),
                password: "Str0ng!Pw".to_string(),
                password_confirmation: "Str0ng!Pw".to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_register_login_identify() {
        let fixture = fixture();
        let user = register(&fixture, "cook@example.com").await;

        let token = fixture.auth.login("cook@example.com", "Str0ng!Pw").await.unwrap();
        let identity = fixture.guard.require_authenticated(Some(&token)).unwrap();

        assert_eq!(identity.email, "cook@example.com");
        assert_eq!(identity.id, user.id.to_string());
    }

    #[tokio::test]
    async fn test_role_change_takes_effect_without_new_token() {
        let fixture = fixture();
        register(&fixture, "cook@example.com").await;
        let token = fixture.auth.login("cook@example.com", "Str0ng!Pw").await.unwrap();
        let header = format!("Bearer {}", token);

        let err = fixture
            .guard
            .require_role(Some(&header), Role::Admin)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        fixture.store.promote("cook@example.com").await;

        let admin = fixture
            .guard
            .require_role(Some(&header), Role::Admin)
            .await
            .unwrap();
        assert!(admin.is_admin());
    }

    #[tokio::test]
    async fn test_second_registration_conflicts() {
        let fixture = fixture();
        register(&fixture, "cook@example.com").await;

        let err = fixture
            .auth
            .register(RegistrationRequest {
                email: "cook@example.com".to_string(),
                username: "other".to_string(),
                password: "An0ther!Pw".to_string(),
                password_confirmation: "An0ther!Pw".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        // original password still works
        assert!(fixture
            .auth
            .authenticate("cook@example.com", "Str0ng!Pw")
            .await
            .unwrap()
            .is_some());
    }
}
