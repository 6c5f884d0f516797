#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;

use console_core::{NewUser, RecordId, UserStatus, UserUpdate};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use backend::BackendError;
use backend::repositories::{
    CorrectionRepository, EventRepository, JobCommentRepository, NotificationRepository,
    SessionRepository, UserRepository,
};

#[tokio::test]
async fn test_events() -> Result<(), Box<dyn Error>> {
    let (_guard, server) = common::setup_backend().await?;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [
                { "_id": "e1", "eventName": "Gala", "createdAt": "2024-01-01T10:00:00Z",
                  "assignedContractors": ["u1"] },
                { "_id": "e2", "eventName": "Picnic", "createdAt": "2024-02-01T10:00:00Z" }
            ],
            "users": [{ "_id": "u1", "name": "Ada", "email": "ada@example.com" }]
        })))
        .mount(&server)
        .await;

    let payload = EventRepository::list().await?;
    assert_eq!(payload.events.len(), 2);
    assert_eq!(payload.events[0].contractors, vec![RecordId::from("u1")]);
    assert_eq!(payload.users[0].display_name(), "Ada");

    Mock::given(method("DELETE"))
        .and(path("/events/e1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .mount(&server)
        .await;
    EventRepository::delete(&RecordId::from("e1")).await?;

    Mock::given(method("DELETE"))
        .and(path("/events/e2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let failed = EventRepository::delete(&RecordId::from("e2")).await;
    match failed {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_users() -> Result<(), Box<dyn Error>> {
    let (_guard, server) = common::setup_backend().await?;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "u1", "name": "Jo", "email": "jo@example.com", "tempPassword": "abc123" },
            { "_id": "u2", "name": "Sam", "email": "sam@example.com", "rate": 22.5 }
        ])))
        .mount(&server)
        .await;

    let users = UserRepository::list().await?;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].status(), UserStatus::Pending);
    assert_eq!(users[1].status(), UserStatus::Active);

    let update = UserUpdate {
        rate: Some(30.0),
        shirt_size: Some("L".to_string()),
        ..Default::default()
    };
    Mock::given(method("PUT"))
        .and(path("/update-user/u2"))
        .and(body_json(json!({ "rate": 30.0, "shirtSize": "L" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u2", "name": "Sam", "email": "sam@example.com", "rate": 30.0, "shirtSize": "L"
        })))
        .mount(&server)
        .await;
    UserRepository::update(&RecordId::from("u2"), &update).await?;

    let mut sam = users[1].clone();
    sam.apply(&update);
    assert_eq!(sam.rate, Some(30.0));
    assert_eq!(sam.shirt_size.as_deref(), Some("L"));

    let new_user = NewUser {
        name: "Lee".to_string(),
        email: "lee@example.com".to_string(),
        rate: None,
    };
    Mock::given(method("POST"))
        .and(path("/create-user"))
        .and(body_json(json!({ "name": "Lee", "email": "lee@example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "_id": "u3", "name": "Lee", "email": "lee@example.com", "tempPassword": "tmp"
        })))
        .mount(&server)
        .await;
    let created = UserRepository::create(&new_user).await?;
    assert_eq!(created.id, RecordId::from("u3"));
    assert_eq!(created.status(), UserStatus::Pending);

    Mock::given(method("POST"))
        .and(path("/resend-email/u3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    UserRepository::resend_email(&RecordId::from("u3")).await?;

    Mock::given(method("DELETE"))
        .and(path("/delete-user/u1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let missing = UserRepository::delete(&RecordId::from("u1")).await;
    assert_eq!(missing.err().and_then(|e| e.status()), Some(404));

    Ok(())
}

#[tokio::test]
async fn test_corrections_and_job_comments() -> Result<(), Box<dyn Error>> {
    let (_guard, server) = common::setup_backend().await?;

    Mock::given(method("GET"))
        .and(path("/corrections/jo@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "corrections": [
                { "_id": "c1", "correctionName": "Missed hour", "status": "Pending",
                  "requestType": "Hours", "userID": "u1", "eventID": "e1" }
            ]
        })))
        .mount(&server)
        .await;

    let mine = CorrectionRepository::list_for_user("jo@example.com").await?;
    assert_eq!(mine.corrections.len(), 1);
    assert!(mine.users.is_empty());
    assert!(mine.events.is_empty());

    Mock::given(method("GET"))
        .and(path("/job-comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobComments": [
                { "_id": "j1", "jobComment": "Great crew", "status": "Read", "type": "Feedback" }
            ],
            "users": [],
            "events": [{ "_id": "e1", "eventName": "Expo" }]
        })))
        .mount(&server)
        .await;

    let comments = JobCommentRepository::list().await?;
    assert_eq!(comments.job_comments[0].text(), "Great crew");
    assert_eq!(comments.events[0].display_name(), "Expo");

    Mock::given(method("DELETE"))
        .and(path("/job-comments/j1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    JobCommentRepository::delete(&RecordId::from("j1")).await?;

    Mock::given(method("DELETE"))
        .and(path("/corrections/c1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    CorrectionRepository::delete(&RecordId::from("c1")).await?;

    Ok(())
}

#[tokio::test]
async fn test_notifications_and_logout() -> Result<(), Box<dyn Error>> {
    let (_guard, server) = common::setup_backend().await?;

    Mock::given(method("GET"))
        .and(path("/notifications/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "_id": "n1", "subject": "Schedule", "text1": "See", "link1": "https://x.test",
              "linkText1": "here", "createdAt": "2024-03-03T09:00:00Z" }
        ])))
        .mount(&server)
        .await;

    let notifications = NotificationRepository::list_admin().await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].segments().len(), 2);

    Mock::given(method("GET"))
        .and(path("/notifications/sam@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    assert!(
        NotificationRepository::list_for_user("sam@example.com")
            .await?
            .is_empty()
    );

    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Logged out" })))
        .mount(&server)
        .await;
    SessionRepository::logout().await?;

    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_is_an_error() -> Result<(), Box<dyn Error>> {
    let (_guard, server) = common::setup_backend().await?;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert!(matches!(
        UserRepository::list().await,
        Err(BackendError::Http(_))
    ));
    Ok(())
}
