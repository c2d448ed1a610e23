//! Unit tests for the content crate

#[cfg(test)]
mod enrichment_tests {
    use crate::domain::entities::{CommentDraft, PostDraft};
    use crate::domain::services::{assign_comment_attribution, assign_post_author};
    use chrono::{Duration, Utc};
    use kernel::id::Id;
    use kernel::principal::{Principal, Role, RoleSet};

    fn writer(id: i64) -> Principal {
        Principal::new(Id::from_i64(id), RoleSet::new([Role::Writer]))
    }

    #[test]
    fn test_post_author_comes_from_principal() {
        let draft = PostDraft {
            title: "Hello".to_string(),
            content: "world".to_string(),
            slug: "hello-1".to_string(),
            published: None,
        };

        let principal = writer(7);
        let new_post = assign_post_author(draft, &principal, Utc::now());

        assert_eq!(new_post.author_id, Id::from_i64(7));
        assert_eq!(new_post.title, "Hello");
        assert_eq!(new_post.content, "world");
        assert_eq!(new_post.slug, "hello-1");
    }

    #[test]
    fn test_post_published_defaults_to_now() {
        let now = Utc::now();
        let draft = PostDraft {
            title: "Hello".to_string(),
            content: "world".to_string(),
            slug: "hello-1".to_string(),
            published: None,
        };

        let new_post = assign_post_author(draft, &writer(1), now);
        assert_eq!(new_post.published, now);
    }

    #[test]
    fn test_post_published_kept_when_supplied() {
        let now = Utc::now();
        let supplied = now - Duration::days(3);
        let draft = PostDraft {
            title: "Hello".to_string(),
            content: "world".to_string(),
            slug: "hello-1".to_string(),
            published: Some(supplied),
        };

        let new_post = assign_post_author(draft, &writer(1), now);
        assert_eq!(new_post.published, supplied);
    }

    #[test]
    fn test_comment_attribution_is_server_controlled() {
        let draft = CommentDraft {
            content: "Nice post".to_string(),
            post_id: Id::from_i64(3),
        };

        let principal = Principal::new(Id::from_i64(9), RoleSet::new([Role::Commentator]));

        let before = Utc::now();
        let new_comment = assign_comment_attribution(draft, &principal, Utc::now());
        let after = Utc::now();

        assert_eq!(new_comment.author_id, Id::from_i64(9));
        assert_eq!(new_comment.post_id, Id::from_i64(3));
        // Publish timestamp falls within the processing window
        assert!(new_comment.published >= before);
        assert!(new_comment.published <= after);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::application::config::ContentConfig;
    use crate::presentation::dto::*;
    use kernel::id::Id;

    fn config() -> ContentConfig {
        ContentConfig::default()
    }

    #[test]
    fn test_create_post_valid() {
        let json = r#"{"title":"Hello","slug":"hello-1","content":"world"}"#;
        let req: CreatePostRequest = serde_json::from_str(json).unwrap();
        let draft = req.validate(&config()).unwrap();
        assert_eq!(draft.title, "Hello");
        assert!(draft.published.is_none());
    }

    #[test]
    fn test_create_post_ignores_client_author() {
        // There is no author field to deserialize into
        let json = r#"{
            "title": "Hello",
            "slug": "hello-1",
            "content": "world",
            "author": {"id": 999, "username": "mallory99"}
        }"#;
        let req: CreatePostRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate(&config()).is_ok());
    }

    #[test]
    fn test_create_post_title_bounds() {
        let cfg = config();

        let req = CreatePostRequest {
            title: "Hi".to_string(),
            slug: "hello-1".to_string(),
            content: "world".to_string(),
            published: None,
        };
        let violations = req.validate(&cfg).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "title"));

        let req = CreatePostRequest {
            title: "A title well past the cap".to_string(),
            slug: "hello-1".to_string(),
            content: "world".to_string(),
            published: None,
        };
        let violations = req.validate(&cfg).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "title"));
    }

    #[test]
    fn test_create_post_widened_title_bound() {
        let cfg = ContentConfig {
            title_max: 120,
            ..ContentConfig::default()
        };
        let req = CreatePostRequest {
            title: "A title well past the legacy cap".to_string(),
            slug: "hello-1".to_string(),
            content: "world".to_string(),
            published: None,
        };
        assert!(req.validate(&cfg).is_ok());
    }

    #[test]
    fn test_create_post_aggregates_violations() {
        let req = CreatePostRequest {
            title: " ".to_string(),
            slug: "abc".to_string(),
            content: "".to_string(),
            published: None,
        };
        let violations = req.validate(&config()).unwrap_err();
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"slug"));
        assert!(fields.contains(&"content"));
    }

    #[test]
    fn test_create_comment_has_no_published_field() {
        // A client-supplied timestamp has no field to land in
        let json = r#"{
            "content": "first!",
            "postId": 5,
            "published": "1999-01-01T00:00:00Z",
            "author": 999
        }"#;
        let req: CreateCommentRequest = serde_json::from_str(json).unwrap();
        let draft = req.validate(&config()).unwrap();
        assert_eq!(draft.post_id, Id::from_i64(5));
        assert_eq!(draft.content, "first!");
    }

    #[test]
    fn test_create_comment_length_cap() {
        let req = CreateCommentRequest {
            content: "x".repeat(256),
            post_id: Id::from_i64(1),
        };
        let violations = req.validate(&config()).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "content"));
    }

    #[test]
    fn test_update_comment_blank() {
        let req = UpdateCommentRequest {
            content: "  ".to_string(),
        };
        assert!(req.validate(&config()).is_err());
    }

    #[test]
    fn test_post_response_shape() {
        use crate::domain::entities::{AuthorRef, Post};
        use chrono::Utc;

        let post = Post {
            post_id: Id::from_i64(1),
            title: "Hello".to_string(),
            slug: "hello-1".to_string(),
            content: "world".to_string(),
            published: Utc::now(),
            author: AuthorRef {
                user_id: Id::from_i64(2),
                username: "alice1".to_string(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&PostResponse::from(post)).unwrap();
        assert!(json.contains(r#""id":1"#));
        assert!(json.contains(r#""slug":"hello-1""#));
        assert!(json.contains(r#""username":"alice1""#));
        // Internal columns stay internal
        assert!(!json.contains("authorId"));
        assert!(!json.contains("createdAt"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::validate::Violations;

    #[test]
    fn test_error_into_response_status_codes() {
        let cases: Vec<(ContentError, StatusCode)> = vec![
            (ContentError::PostNotFound, StatusCode::NOT_FOUND),
            (ContentError::CommentNotFound, StatusCode::NOT_FOUND),
            (ContentError::SlugTaken, StatusCode::CONFLICT),
            (ContentError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ContentError::Forbidden, StatusCode::FORBIDDEN),
            (
                ContentError::Validation(Violations::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ContentError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_error_display() {
        assert!(ContentError::PostNotFound.to_string().contains("Post"));
        assert!(ContentError::SlugTaken.to_string().contains("slug"));
    }
}
