//! Video category endpoints.  Categories form a two-level tree.

use serde_json::Value;

use super::request::ApiRequest;

/// All categories with their video counts.
pub fn get_video_categories() -> ApiRequest {
    ApiRequest::get("/api/video-categories")
}

pub fn get_video_category_tree() -> ApiRequest {
    ApiRequest::get("/api/video-categories/tree")
}

/// Alias of [`get_video_category_tree`], kept for callers that use the
/// shorter name.
pub fn get_category_tree() -> ApiRequest {
    get_video_category_tree()
}

pub fn get_top_video_categories() -> ApiRequest {
    ApiRequest::get("/api/video-categories/top")
}

pub fn get_child_video_categories(parent_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/video-categories/children/{parent_id}"))
}

pub fn get_video_category_by_id(id: i64) -> ApiRequest {
    ApiRequest::get(format!("/api/video-categories/{id}"))
}

pub fn add_video_category(category: Value) -> ApiRequest {
    ApiRequest::post("/api/video-categories").json(category)
}

/// Updates a category; the id travels inside the body, not the path.
pub fn update_video_category(category: Value) -> ApiRequest {
    ApiRequest::put("/api/video-categories").json(category)
}

pub fn delete_video_category(id: i64) -> ApiRequest {
    ApiRequest::delete(format!("/api/video-categories/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{HttpMethod, RequestBody};
    use serde_json::json;

    #[test]
    fn test_tree_alias_matches() {
        assert_eq!(get_category_tree(), get_video_category_tree());
        assert_eq!(get_category_tree().url, "/api/video-categories/tree");
    }

    #[test]
    fn test_read_endpoints() {
        assert_eq!(get_video_categories().url, "/api/video-categories");
        assert_eq!(get_top_video_categories().url, "/api/video-categories/top");
        assert_eq!(
            get_child_video_categories(3).url,
            "/api/video-categories/children/3"
        );
        assert_eq!(get_video_category_by_id(8).url, "/api/video-categories/8");
        assert_eq!(get_video_category_by_id(8).method, HttpMethod::Get);
    }

    #[test]
    fn test_add_and_update_share_url_but_not_verb() {
        let body = json!({"id": 4, "name": "后端"});
        let add = add_video_category(body.clone());
        let update = update_video_category(body.clone());
        assert_eq!(add.url, update.url);
        assert_eq!(add.method, HttpMethod::Post);
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.data, Some(RequestBody::Json(body)));
    }

    #[test]
    fn test_delete_category() {
        let req = delete_video_category(4);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "/api/video-categories/4");
    }
}
