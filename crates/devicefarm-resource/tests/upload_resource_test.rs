//! Upload resource lifecycle tests.
//!
//! Run with: `cargo test -p devicefarm-resource --test upload_resource_test`

mod helpers;

use devicefarm_client::RecordedRequest;
use devicefarm_core::{ErrorMetadata, Upload, UploadState, UploadType};
use devicefarm_resource::{ReadOutcome, ResourceError};
use helpers::{config, project_arn, setup};

#[tokio::test]
async fn test_create_and_read_every_upload_type() {
    let t = setup();

    for upload_type in UploadType::ALL {
        let state = t
            .resource
            .create(&config(upload_type, "artifact"))
            .await
            .unwrap_or_else(|e| panic!("create {} failed: {}", upload_type, e));

        assert_eq!(state.upload_type, Some(upload_type));

        let ReadOutcome::Found(read) = t.resource.read(&state.id, false).await.unwrap() else {
            panic!("{} upload disappeared", upload_type);
        };
        assert_eq!(read.upload_type, Some(upload_type));
    }

    assert_eq!(t.api.len().await, UploadType::ALL.len());
}

#[tokio::test]
async fn test_create_populates_computed_fields() {
    let t = setup();
    let state = t
        .resource
        .create(
            &config(UploadType::AndroidApp, "app.apk")
                .with_content_type("application/octet-stream"),
        )
        .await
        .unwrap();

    assert_eq!(state.id, state.arn);
    assert_eq!(state.project_arn, project_arn());
    assert_eq!(state.name, "app.apk");
    assert_eq!(
        state.content_type.as_deref(),
        Some("application/octet-stream")
    );
    assert!(state.url.is_some());
    assert_eq!(state.category.as_deref(), Some("PRIVATE"));

    let requests = t.api.requests().await;
    assert!(matches!(requests[0], RecordedRequest::Create(_)));
    assert_eq!(requests[1], RecordedRequest::Get(state.arn.clone()));
}

#[tokio::test]
async fn test_create_rejection_is_wrapped() {
    let t = setup();
    t.api.reject_next("ArgumentException: bad project").await;

    let err = t
        .resource
        .create(&config(UploadType::AndroidApp, "app.apk"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResourceError::Create { .. }));
    assert!(err.to_string().contains("Error creating Device Farm upload"));
    assert!(err.to_string().contains("ArgumentException: bad project"));
    assert!(t.api.is_empty().await);
}

#[tokio::test]
async fn test_create_validates_before_calling_service() {
    let t = setup();

    let too_long = config(UploadType::AndroidApp, "app.apk").with_content_type("x".repeat(65));
    let err = t.resource.create(&too_long).await.unwrap_err();
    assert!(matches!(err, ResourceError::Validation(_)));
    assert_eq!(err.error_code(), "INVALID_CONFIGURATION");

    let empty_name = config(UploadType::AndroidApp, "");
    assert!(t.resource.create(&empty_name).await.is_err());

    let long_name = config(UploadType::AndroidApp, &"n".repeat(257));
    assert!(t.resource.create(&long_name).await.is_err());

    assert!(t.api.requests().await.is_empty());
}

#[tokio::test]
async fn test_create_omits_empty_content_type() {
    let t = setup();
    let state = t
        .resource
        .create(&config(UploadType::AndroidApp, "app.apk").with_content_type(""))
        .await
        .unwrap();

    let requests = t.api.requests().await;
    let RecordedRequest::Create(create) = &requests[0] else {
        panic!("expected CreateUpload first, got {:?}", requests[0]);
    };
    assert_eq!(create.content_type, None);
    assert_eq!(state.content_type, None);
}

#[tokio::test]
async fn test_read_malformed_upload_arn_fails_decode() {
    let t = setup();
    let arn = "arn:aws:devicefarm:us-west-2:123456789012:upload:nosep";
    t.api
        .insert(Upload {
            arn: arn.to_string(),
            name: Some("app.apk".to_string()),
            upload_type: Some(UploadType::AndroidApp),
            content_type: None,
            url: None,
            category: None,
            metadata: None,
        })
        .await;

    let err = t.resource.read(arn, false).await.unwrap_err();

    assert!(matches!(err, ResourceError::DecodeProjectArn { arn: ref bad, .. } if bad == arn));
    assert_eq!(err.error_code(), "INVALID_UPLOAD_ARN");
    assert!(err.to_string().contains(arn));
    assert!(t.resource.import(arn).await.is_err());
}

#[tokio::test]
async fn test_read_missing_existing_record_clears_state() {
    let t = setup();
    let mut state = t
        .resource
        .create(&config(UploadType::AndroidApp, "app.apk"))
        .await
        .unwrap();
    assert!(t.api.forget(&state.arn).await);

    t.resource.refresh(&mut state).await.unwrap();

    assert!(state.is_removed());
    assert_eq!(state, UploadState::default());
}

#[tokio::test]
async fn test_read_missing_new_record_is_error() {
    let t = setup();
    let arn = format!(
        "arn:aws:devicefarm:us-west-2:123456789012:upload:{}/gone",
        helpers::PROJECT_ID
    );

    let err = t.resource.read(&arn, true).await.unwrap_err();
    assert!(matches!(err, ResourceError::Read { .. }));
    assert_eq!(err.error_code(), "READ_FAILED");

    assert_eq!(
        t.resource.read(&arn, false).await.unwrap(),
        ReadOutcome::Removed
    );
}

#[tokio::test]
async fn test_update_name_only_sends_partial_request() {
    let t = setup();
    let desired =
        config(UploadType::AndroidApp, "app.apk").with_content_type("application/octet-stream");
    let prior = t.resource.create(&desired).await.unwrap();

    let mut renamed = desired.clone();
    renamed.mutable.name = "renamed.apk".to_string();
    let ReadOutcome::Found(updated) = t.resource.update(&prior, &renamed).await.unwrap() else {
        panic!("upload disappeared during update");
    };

    let update = t
        .api
        .requests()
        .await
        .into_iter()
        .find_map(|r| match r {
            RecordedRequest::Update(req) => Some(req),
            _ => None,
        })
        .expect("no UpdateUpload request sent");
    assert_eq!(update.arn, prior.arn);
    assert_eq!(update.name.as_deref(), Some("renamed.apk"));
    assert!(update.content_type.is_none());

    let body = serde_json::to_value(&update).unwrap();
    assert!(body.get("content_type").is_none());

    assert_eq!(updated.name, "renamed.apk");
    assert_eq!(
        updated.content_type.as_deref(),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn test_update_without_changes_only_reads() {
    let t = setup();
    let desired = config(UploadType::IosApp, "app.ipa");
    let prior = t.resource.create(&desired).await.unwrap();

    let outcome = t.resource.update(&prior, &desired).await.unwrap();
    assert_eq!(outcome, ReadOutcome::Found(prior.clone()));

    let requests = t.api.requests().await;
    assert!(!requests
        .iter()
        .any(|r| matches!(r, RecordedRequest::Update(_))));
}

#[tokio::test]
async fn test_update_of_create_only_field_requires_replacement() {
    let t = setup();
    let prior = t
        .resource
        .create(&config(UploadType::AndroidApp, "app.apk"))
        .await
        .unwrap();

    let err = t
        .resource
        .update(&prior, &config(UploadType::InstrumentationTestPackage, "app.apk"))
        .await
        .unwrap_err();

    match err {
        ResourceError::RequiresReplacement { id, fields } => {
            assert_eq!(id, prior.id);
            assert_eq!(fields, vec!["type"]);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_update_rejection_is_wrapped() {
    let t = setup();
    let desired = config(UploadType::AndroidApp, "app.apk");
    let prior = t.resource.create(&desired).await.unwrap();
    t.api.reject_next("ServiceAccountException").await;

    let mut renamed = desired;
    renamed.mutable.name = "renamed.apk".to_string();
    let err = t.resource.update(&prior, &renamed).await.unwrap_err();

    assert!(matches!(err, ResourceError::Update { .. }));
    assert_eq!(err.error_code(), "UPDATE_FAILED");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let t = setup();
    let state = t
        .resource
        .create(&config(UploadType::WebApp, "site.zip"))
        .await
        .unwrap();

    t.resource.delete(&state.id).await.unwrap();
    assert!(t.api.is_empty().await);

    t.resource.delete(&state.id).await.unwrap();
    t.resource
        .delete("arn:aws:devicefarm:us-west-2:123456789012:upload:never/existed")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_rejection_is_wrapped() {
    let t = setup();
    let state = t
        .resource
        .create(&config(UploadType::WebApp, "site.zip"))
        .await
        .unwrap();
    t.api.reject_next("LimitExceededException").await;

    let err = t.resource.delete(&state.id).await.unwrap_err();
    assert!(matches!(err, ResourceError::Delete { .. }));
    assert_eq!(t.api.len().await, 1);
}

#[tokio::test]
async fn test_import_existing_upload() {
    let t = setup();
    let created = t
        .resource
        .create(&config(UploadType::AppiumJavaJunitTestSpec, "spec.yml"))
        .await
        .unwrap();

    let imported = t.resource.import(&created.arn).await.unwrap();
    assert_eq!(imported, created);
}

#[tokio::test]
async fn test_import_missing_upload_fails() {
    let t = setup();
    let arn = "arn:aws:devicefarm:us-west-2:123456789012:upload:p/missing";

    let err = t.resource.import(arn).await.unwrap_err();
    assert!(matches!(err, ResourceError::ImportNotFound(ref id) if id == arn));
}
