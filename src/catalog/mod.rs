//! Built-in endpoint catalog for the api.video REST API.
//!
//! Each resource module contributes its descriptors; [`all`] concatenates
//! them in a stable order, which is also the `tools/list` order.

mod account;
mod analytics;
mod auth;
mod captions;
mod chapters;
mod live_streams;
mod players;
mod upload_tokens;
mod videos;
mod webhooks;

use crate::descriptor::EndpointDescriptor;
use crate::types::ParamKind;

const CURRENT_PAGE: &str = "Choose the number of search results to return per page. Minimum value: 1";
const PAGE_SIZE: &str = "Results per page. Allowed values 1-100, default is 25.";

/// Every endpoint the server exposes.
pub fn all() -> Vec<EndpointDescriptor> {
    let mut endpoints = Vec::new();
    endpoints.extend(videos::endpoints());
    endpoints.extend(live_streams::endpoints());
    endpoints.extend(players::endpoints());
    endpoints.extend(webhooks::endpoints());
    endpoints.extend(captions::endpoints());
    endpoints.extend(chapters::endpoints());
    endpoints.extend(analytics::endpoints());
    endpoints.extend(upload_tokens::endpoints());
    endpoints.extend(auth::endpoints());
    endpoints.extend(account::endpoints());
    endpoints
}

/// Append the shared `currentPage` / `pageSize` query parameters.
fn paginated(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .query("currentPage", ParamKind::Number, CURRENT_PAGE)
        .query("pageSize", ParamKind::Number, PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use reqwest::Method;

    use super::*;
    use crate::types::ParamLocation;

    #[test]
    fn exposes_forty_tools() {
        assert_eq!(all().len(), 40);
    }

    #[test]
    fn every_descriptor_validates() {
        for d in all() {
            d.validate()
                .unwrap_or_else(|e| panic!("{} failed validation: {e}", d.name()));
        }
    }

    #[test]
    fn tool_names_are_unique() {
        let all = all();
        let names: HashSet<&str> = all.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn every_tool_is_described() {
        for d in all() {
            assert!(!d.description().is_empty(), "{} has no description", d.name());
        }
    }

    #[test]
    fn body_params_only_on_writes() {
        for d in all() {
            let has_body_params = d.params_in(ParamLocation::Body).next().is_some();
            if has_body_params {
                assert!(d.body_shape().is_some(), "{} declares fields but no body", d.name());
            }
            if *d.method() == Method::GET || *d.method() == Method::DELETE {
                assert!(d.body_shape().is_none(), "{} sends a body", d.name());
            }
        }
    }

    #[test]
    fn names_follow_the_method_path_rule() {
        let names: Vec<String> = all().iter().map(|d| d.name().to_string()).collect();
        for expected in [
            "get_videos",
            "post_videos",
            "patch_videos_videoId",
            "get_videos_videoId_status",
            "patch_videos_videoId_thumbnail",
            "post_live-streams",
            "delete_live-streams_liveStreamId_thumbnail",
            "delete_players_playerId_logo",
            "get_videos_videoId_captions_language",
            "get_videos_videoId_chapters",
            "get_analytics_sessions_sessionId_events",
            "delete_upload-tokens_uploadToken",
            "post_auth_api-key",
            "post_auth_refresh",
            "get_account",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn list_endpoints_are_paginated() {
        for d in all() {
            if d.name().starts_with("get_") && d.response_shape().name().contains("Page<") {
                let query: Vec<&str> = d.params_in(ParamLocation::Query).map(|p| p.name).collect();
                assert!(query.contains(&"currentPage"), "{}", d.name());
                assert!(query.contains(&"pageSize"), "{}", d.name());
            }
        }
    }
}
