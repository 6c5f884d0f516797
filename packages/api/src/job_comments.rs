//! Job comment server functions.

use console_core::JobCommentsPayload;
use dioxus::prelude::*;

/// List all job comments with related users and events.
#[get("/api/job-comments")]
pub async fn list_job_comments() -> Result<JobCommentsPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::JobCommentRepository;

        crate::init::ready().await?;

        JobCommentRepository::list()
            .await
            .map_err(crate::init::backend_failure("load job comments"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List the job comments left by the user with `email`.
#[get("/api/job-comments/by-user/:email")]
pub async fn list_user_job_comments(email: String) -> Result<JobCommentsPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::JobCommentRepository;

        crate::init::ready().await?;

        JobCommentRepository::list_for_user(&email)
            .await
            .map_err(crate::init::backend_failure("load user job comments"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Delete a job comment.
#[post("/api/job-comments/:id/delete")]
pub async fn delete_job_comment(id: String) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use backend::repositories::JobCommentRepository;
        use console_core::RecordId;

        crate::init::ready().await?;

        JobCommentRepository::delete(&RecordId::from(id))
            .await
            .map_err(crate::init::backend_failure("delete job comment"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
