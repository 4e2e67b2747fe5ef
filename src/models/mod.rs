//! Wire records for the api.video REST API.
//!
//! List endpoints share the generic [`Page`] envelope; everything else is a
//! flat entity or request payload. Every optional field is skipped when
//! absent so a decoded record re-serializes to what the API sent.

pub mod account;
pub mod analytics;
pub mod auth;
pub mod captions;
pub mod common;
pub mod live_stream;
pub mod player;
pub mod upload_token;
pub mod video;
pub mod webhook;

pub use account::Account;
pub use analytics::{PlayerSession, PlayerSessionEvent};
pub use auth::{AccessToken, AuthenticatePayload, RefreshTokenPayload};
pub use captions::{Caption, CaptionsUpdatePayload, Chapter};
pub use common::{ApiProblem, Link, Metadata, Page, Pagination};
pub use live_stream::{LiveStream, LiveStreamCreationPayload, LiveStreamUpdatePayload};
pub use player::{Player, PlayerTheme};
pub use upload_token::{TokenCreationPayload, UploadToken};
pub use video::{
    Video, VideoCreationPayload, VideoStatus, VideoThumbnailPickPayload, VideoUpdatePayload,
};
pub use webhook::{Webhook, WebhookCreationPayload};
