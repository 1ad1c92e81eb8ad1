use chrono::NaiveDate;

use deiripakku_core::DailyLockStore;

/// The one persisted value: the date the daily pack was last completed.
pub(crate) const DAILY_LOCK_KEY: &str = "daily-pack-claimed";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// localStorage-backed implementation of the core's daily-lock port.
/// Unreadable or malformed values read as "never claimed".
pub(crate) struct BrowserDailyLock;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl DailyLockStore for BrowserDailyLock {
    fn get(&self) -> Option<NaiveDate> {
        let raw = storage()?.get_item(DAILY_LOCK_KEY).ok()??;
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
    }

    fn set(&mut self, date: NaiveDate) {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(DAILY_LOCK_KEY, &date.format(DATE_FORMAT).to_string());
    }
}

pub(crate) fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or(NaiveDate::MIN)
}

pub(crate) fn time_seed() -> u32 {
    js_sys::Date::now() as u64 as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn lock_round_trips_through_local_storage() {
        let mut lock = BrowserDailyLock;
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        lock.set(date);
        assert_eq!(lock.get(), Some(date));

        let raw = storage().unwrap().get_item(DAILY_LOCK_KEY).unwrap().unwrap();
        assert_eq!(raw, "2024-03-09");
        let _ = storage().unwrap().remove_item(DAILY_LOCK_KEY);
    }

    #[wasm_bindgen_test]
    fn garbage_in_storage_reads_as_unclaimed() {
        storage()
            .unwrap()
            .set_item(DAILY_LOCK_KEY, "not-a-date")
            .unwrap();
        assert_eq!(BrowserDailyLock.get(), None);
        let _ = storage().unwrap().remove_item(DAILY_LOCK_KEY);
    }

    #[wasm_bindgen_test]
    fn today_is_a_real_calendar_date() {
        assert!(today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
