pub mod card;
pub mod controller;
pub mod gesture;
pub mod pack;
pub mod roster;
pub mod score;

pub use card::{catalog_pool, profile_by_id, Card, ProfileCatalogEntry, Rarity, PROFILE_CATALOG};
pub use controller::{DailyLockStore, MemoryLock, PackController, PackPhase};
pub use gesture::{
    exit_offset, DragGesture, GestureOutcome, SwipeDirection, DRAG_ROTATION_PER_PX,
    EXIT_DISTANCE_FACTOR, EXIT_ROTATION_DEG, SWIPE_THRESHOLD_PX, TAP_SLOP_PX,
};
pub use pack::{draw_pack, PACK_SIZE};
pub use roster::Roster;
pub use score::{parse_score_response, ScoreBoard, ScoreSlot};
