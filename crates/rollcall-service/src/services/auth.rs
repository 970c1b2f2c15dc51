//! Authentication service
//!
//! Handles login, token validation and user registration.

use rollcall_common::AppError;
use rollcall_core::entities::User;
use rollcall_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{CreatedUserResponse, LoginRequest, LoginResponse, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check credentials against the stored hash
    ///
    /// Unknown emails and wrong passwords fail the same way; only the logs
    /// tell them apart.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        match self.ctx.password_service().verify_or_error(password, &password_hash) {
            Ok(()) => Ok(user),
            Err(AppError::InvalidCredentials) => {
                warn!(user_id = %user.id, "Login failed: invalid password");
                Err(ServiceError::App(AppError::InvalidCredentials))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Sign a token for the user
    pub fn issue_token(&self, user: &User) -> ServiceResult<String> {
        Ok(self.ctx.jwt_service().issue_token(user.id)?)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self.authenticate(&request.email, &request.password).await?;
        let token = self.issue_token(&user)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Resolve the user a bearer token was issued to
    ///
    /// # Errors
    /// `TokenExpired` / `InvalidToken` from decoding, `TokenUserNotFound`
    /// when the account no longer exists.
    #[instrument(skip_all)]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().decode_token(token)?;

        self.ctx
            .user_repo()
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| {
                warn!(user_id = %claims.user_id(), "Token refers to a missing user");
                ServiceError::App(AppError::TokenUserNotFound)
            })
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<CreatedUserResponse> {
        let name = request.name.trim();
        let email = request.email.trim();

        if name.is_empty() || email.is_empty() || request.password.trim().is_empty() {
            return Err(ServiceError::validation(
                "The fields name, email and password are required",
            ));
        }

        if self.ctx.user_repo().email_exists(email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        // The unique index still guards against a concurrent registration
        let user_id = self
            .ctx
            .user_repo()
            .create(name, email, &password_hash)
            .await?;

        info!(user_id = %user_id, "User registered successfully");

        Ok(CreatedUserResponse {
            id: user_id,
            message: "User created successfully".to_string(),
        })
    }
}
