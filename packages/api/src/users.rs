//! User management server functions.

use console_core::{NewUser, User, UserUpdate};
use dioxus::prelude::*;

/// List all users.
#[get("/api/users")]
pub async fn list_users() -> Result<Vec<User>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::UserRepository;

        crate::init::ready().await?;

        UserRepository::list()
            .await
            .map_err(crate::init::backend_failure("load users"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Update a user.
#[post("/api/users/:id/update")]
pub async fn update_user(id: String, update: UserUpdate) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::UserRepository;
        use console_core::RecordId;

        crate::init::ready().await?;

        UserRepository::update(&RecordId::from(id), &update)
            .await
            .map_err(crate::init::backend_failure("update user"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Create a user; the backend sends them an activation email.
#[post("/api/users/create")]
pub async fn create_user(user: NewUser) -> Result<User, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::UserRepository;

        if user.name.trim().is_empty() || user.email.trim().is_empty() {
            return Err(ServerFnError::new("Name and email are required"));
        }

        crate::init::ready().await?;

        UserRepository::create(&user)
            .await
            .map_err(crate::init::backend_failure("create user"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Delete a user.
#[post("/api/users/:id/delete")]
pub async fn delete_user(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::UserRepository;
        use console_core::RecordId;

        crate::init::ready().await?;

        UserRepository::delete(&RecordId::from(id))
            .await
            .map_err(crate::init::backend_failure("delete user"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Resend the activation email to a pending user.
#[post("/api/users/:id/resend-email")]
pub async fn resend_email(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::UserRepository;
        use console_core::RecordId;

        crate::init::ready().await?;

        UserRepository::resend_email(&RecordId::from(id))
            .await
            .map_err(crate::init::backend_failure("resend activation email"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
