use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::UseStateHandle;

use deiripakku_core::{parse_score_response, Card, ScoreBoard, ScoreSlot};

use crate::api::{api_base, ApiError};

const SCORE_PATH: &str = "/beauty-score";

/// Shared handle to the live score board plus a state mirror that forces a
/// re-render whenever a result lands (live/state pair, so async writers and
/// the render path see the same data).
#[derive(Clone)]
pub(crate) struct ScoreStore {
    board: Rc<RefCell<ScoreBoard>>,
    version: UseStateHandle<u64>,
}

impl PartialEq for ScoreStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.board, &other.board) && *self.version == *other.version
    }
}

impl ScoreStore {
    pub(crate) fn new(board: Rc<RefCell<ScoreBoard>>, version: UseStateHandle<u64>) -> Self {
        Self { board, version }
    }

    fn bump(&self) {
        self.version.set((*self.version).wrapping_add(1));
    }

    fn begin_pack(&self, pack: &[Card]) -> u64 {
        let generation = self
            .board
            .borrow_mut()
            .begin_pack(pack.iter().map(|card| card.id.as_str()));
        self.bump();
        generation
    }

    fn record(&self, generation: u64, id: &str, score: Option<f64>) {
        if self.board.borrow_mut().record(generation, id, score) {
            self.bump();
        }
    }

    pub(crate) fn slot(&self, id: &str) -> Option<ScoreSlot> {
        self.board.borrow().slot(id)
    }

    pub(crate) fn is_scoring(&self) -> bool {
        self.board.borrow().is_scoring()
    }
}

/// Kicks off one best-effort scoring fetch per card. Each fetch is tagged
/// with the generation current at dispatch; by the time a slow response
/// arrives the board may already belong to a newer pack, in which case the
/// result is dropped on the floor.
pub(crate) fn fetch_pack_scores(store: &ScoreStore, pack: &[Card]) {
    let generation = store.begin_pack(pack);
    for card in pack {
        let store = store.clone();
        let card = card.clone();
        spawn_local(async move {
            let score = match score_card(&card).await {
                Ok(score) => score,
                Err(err) => {
                    gloo::console::warn!(format!("beauty score failed for {}: {err}", card.id));
                    None
                }
            };
            store.record(generation, &card.id, score);
        });
    }
}

async fn score_card(card: &Card) -> Result<Option<f64>, ApiError> {
    let Some(image) = card.image.as_deref() else {
        // nothing to submit; the badge just reads N/A
        return Ok(None);
    };
    let bytes = fetch_image_bytes(image).await?;
    let form = build_score_form(&bytes, &card.name).map_err(js_err)?;
    let response = Request::post(&format!("{}{SCORE_PATH}", api_base()))
        .body(form)
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Network(format!(
            "HTTP {} from {SCORE_PATH}",
            response.status()
        )));
    }
    let value: serde_json::Value = response.json().await.map_err(ApiError::parse)?;
    Ok(parse_score_response(&value))
}

async fn fetch_image_bytes(src: &str) -> Result<Vec<u8>, ApiError> {
    let response = Request::get(src).send().await.map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Network(format!(
            "HTTP {} while fetching {src}",
            response.status()
        )));
    }
    response.binary().await.map_err(ApiError::network)
}

fn build_score_form(bytes: &[u8], name: &str) -> Result<web_sys::FormData, JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename("image", &blob, "profile.jpg")?;
    form.append_with_str("name", name)?;
    Ok(form)
}

fn js_err(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}
