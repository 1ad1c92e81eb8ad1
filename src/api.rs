use std::fmt;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use deiripakku_core::Card;

pub(crate) fn api_base() -> String {
    let raw = option_env!("DEIRIPAKKU_API_BASE")
        .or(option_env!("TRUNK_PUBLIC_API_BASE"))
        .unwrap_or("http://localhost:8000");
    raw.trim().trim_end_matches('/').to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ApiError {
    Network(String),
    Parse(String),
}

impl ApiError {
    pub(crate) fn network<E: fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn parse<E: fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Parse(message) => write!(f, "unexpected response: {message}"),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct ProfilePayload {
    name: String,
    major: String,
    company: String,
    bio: String,
    location: String,
    interests: Vec<String>,
    experience: String,
    age: u32,
}

impl ProfilePayload {
    pub(crate) fn from_card(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            major: card.major.clone(),
            company: card.company.clone(),
            bio: card.bio.clone(),
            location: card.location.clone(),
            interests: card.interests.clone(),
            experience: card.experience.clone(),
            age: card.age,
        }
    }
}

#[derive(Serialize)]
struct ProfileRequest {
    profile: ProfilePayload,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct AiOverview {
    pub(crate) summary: String,
    pub(crate) personality_insights: String,
    pub(crate) compatibility_notes: String,
    pub(crate) conversation_starters: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SatiricalInsights {
    pub(crate) insights: Vec<String>,
}

#[derive(Serialize)]
struct SocialsRequest {
    name: String,
    company: String,
    location: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SocialProfile {
    pub(crate) platform: String,
    pub(crate) url: String,
    pub(crate) confidence: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SocialProfiles {
    pub(crate) profiles: Vec<SocialProfile>,
}

#[derive(Serialize)]
struct DraftRequest {
    recipient: ProfilePayload,
    tone: String,
    message_type: String,
    context: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct DraftedMessage {
    pub(crate) message: String,
}

async fn post_json<Body, Response>(path: &str, body: &Body) -> Result<Response, ApiError>
where
    Body: Serialize,
    Response: DeserializeOwned,
{
    let url = format!("{}{path}", api_base());
    let response = Request::post(&url)
        .json(body)
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Network(format!(
            "HTTP {} from {path}",
            response.status()
        )));
    }
    response.json().await.map_err(ApiError::parse)
}

pub(crate) async fn fetch_ai_overview(card: &Card) -> Result<AiOverview, ApiError> {
    post_json(
        "/api/ai-overview",
        &ProfileRequest {
            profile: ProfilePayload::from_card(card),
        },
    )
    .await
}

pub(crate) async fn fetch_satirical_insights(card: &Card) -> Result<SatiricalInsights, ApiError> {
    post_json(
        "/api/satirical-insights",
        &ProfileRequest {
            profile: ProfilePayload::from_card(card),
        },
    )
    .await
}

pub(crate) async fn fetch_social_profiles(card: &Card) -> Result<SocialProfiles, ApiError> {
    post_json(
        "/api/find-socials",
        &SocialsRequest {
            name: card.name.clone(),
            company: card.company.clone(),
            location: card.location.clone(),
        },
    )
    .await
}

pub(crate) async fn draft_message(
    card: &Card,
    tone: &str,
    message_type: &str,
    context: Option<String>,
) -> Result<DraftedMessage, ApiError> {
    post_json(
        "/api/draft-message",
        &DraftRequest {
            recipient: ProfilePayload::from_card(card),
            tone: tone.to_string(),
            message_type: message_type.to_string(),
            context,
        },
    )
    .await
}
