//! X API request and response bodies.

use serde::{Deserialize, Serialize};
use threadwright_core::PostRequest;

/// v2 create-post request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostBody {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<PostMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<PostReply>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PostMedia {
    media_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PostReply {
    in_reply_to_tweet_id: String,
}

impl From<&PostRequest> for CreatePostBody {
    fn from(req: &PostRequest) -> Self {
        Self {
            text: req.text().clone(),
            media: req.media().as_ref().map(|m| PostMedia {
                media_ids: vec![m.0.clone()],
            }),
            reply: req.reply_to().as_ref().map(|p| PostReply {
                in_reply_to_tweet_id: p.0.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatePostData {
    pub(crate) id: String,
}

/// v2 create-post response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatePostResponse {
    pub(crate) data: CreatePostData,
}

/// v1.1 media upload response body.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MediaUploadResponse {
    pub(crate) media_id_string: String,
}
