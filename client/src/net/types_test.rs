use super::*;

// =============================================================
// ApiEnvelope
// =============================================================

#[test]
fn envelope_success_with_data_unwraps() {
    let env: ApiEnvelope<BlogPostList> =
        serde_json::from_value(serde_json::json!({"success": true, "data": {"posts": []}})).unwrap();
    assert_eq!(env.into_result().unwrap(), BlogPostList::default());
}

#[test]
fn envelope_failure_carries_server_error() {
    let env: ApiEnvelope<BlogPost> =
        serde_json::from_value(serde_json::json!({"success": false, "error": "Post not found"})).unwrap();
    assert_eq!(env.into_result(), Err(ApiError::Rejected("Post not found".to_owned())));
}

#[test]
fn envelope_success_without_data_is_missing_data() {
    let env: ApiEnvelope<BlogPost> = serde_json::from_value(serde_json::json!({"success": true})).unwrap();
    assert_eq!(env.into_result(), Err(ApiError::MissingData));
}

#[test]
fn envelope_ack_ignores_payload() {
    let ok: ApiEnvelope<serde_json::Value> = serde_json::from_value(serde_json::json!({"success": true})).unwrap();
    assert_eq!(ok.into_ack(), Ok(()));
    let rejected: ApiEnvelope<serde_json::Value> =
        serde_json::from_value(serde_json::json!({"success": false})).unwrap();
    assert_eq!(rejected.into_ack(), Err(ApiError::Rejected("request rejected".to_owned())));
}

// =============================================================
// ContentBlock
// =============================================================

#[test]
fn content_block_keeps_free_form_fields() {
    let block: ContentBlock = serde_json::from_value(serde_json::json!({
        "title": "Invest your spare change",
        "bullets": ["Round up", 3, "Grow"],
        "layout_type": "split",
        "images": ["/hero.png"]
    }))
    .unwrap();
    assert_eq!(block.text("title"), Some("Invest your spare change"));
    assert_eq!(block.list("bullets"), Some(vec!["Round up".to_owned(), "Grow".to_owned()]));
    assert_eq!(block.layout_type.as_deref(), Some("split"));
    assert_eq!(block.images.len(), 1);
    assert!(block.fields.get("layout_type").is_none());
    assert_eq!(block.text("missing"), None);
}

#[test]
fn frontend_content_is_keyed_by_section() {
    let content: FrontendContent = serde_json::from_value(serde_json::json!({
        "hero": {"title": "Hi"},
        "pricing": {}
    }))
    .unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(content["hero"].text("title"), Some("Hi"));
}

#[test]
fn content_block_tolerates_null_images_and_odd_layout() {
    let block: ContentBlock = serde_json::from_value(serde_json::json!({
        "title": "Hi",
        "images": null,
        "layout_type": 7
    }))
    .unwrap();
    assert!(block.images.is_empty());
    assert_eq!(block.layout_type, None);
    assert_eq!(block.text("title"), Some("Hi"));
}

#[test]
fn one_bad_section_keeps_the_good_ones() {
    let content = parse_frontend_content(serde_json::json!({
        "hero": {"title": "Hi", "images": null},
        "brand": "Kamioi",
        "features": {"title": "Why", "layout_type": {"nested": true}}
    }))
    .unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(content["hero"].text("title"), Some("Hi"));
    assert_eq!(content["features"].text("title"), Some("Why"));
    assert!(!content.contains_key("brand"));
}

#[test]
fn non_object_content_payload_is_a_decode_error() {
    let err = parse_frontend_content(serde_json::json!(["hero"])).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Blog + demo request
// =============================================================

#[test]
fn blog_post_accepts_numeric_id_and_sparse_fields() {
    let post: BlogPost =
        serde_json::from_value(serde_json::json!({"id": 17, "slug": "round-ups", "title": "Round-ups"})).unwrap();
    assert_eq!(post.id, "17");
    assert!(post.content.is_empty());
    assert!(post.tags.is_empty());
}

#[test]
fn demo_request_omits_empty_optionals() {
    let req = DemoRequest {
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
        memo: Some("Hello".to_owned()),
        ..DemoRequest::default()
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({"name": "Sam", "email": "sam@example.com", "memo": "Hello"}));
}

#[test]
fn demo_request_record_flattens_request_fields() {
    let record: DemoRequestRecord = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Sam",
        "email": "sam@example.com",
        "status": "new"
    }))
    .unwrap();
    assert_eq!(record.id, "3");
    assert_eq!(record.request.name, "Sam");
    assert_eq!(record.status.as_deref(), Some("new"));
}

#[test]
fn login_response_normalizes_user_role() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "t",
        "user": {"id": 1, "role": "business"}
    }))
    .unwrap();
    assert_eq!(resp.user.effective_role, Some(crate::state::auth::Role::Business));
}
