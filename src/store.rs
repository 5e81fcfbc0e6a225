//! Versioned progress store
//!
//! One JSON document under one well-known storage key holds every saved
//! puzzle session. Each operation loads the whole document, mutates a copy
//! and writes it back — a single read-modify-write, no partial writes. A
//! document with the wrong version or a shape we do not recognize reads as
//! empty; storage failures never reach the caller.
//!
//! All "shape might be wrong" handling for persisted entries lives in this
//! module's decode boundary, including masks written by the legacy
//! arbitrary-width schema (decimal strings), which are reduced to u32.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::history::{HISTORY_LIMIT, History, normalize_history};
use crate::key::PuzzleKind;
use crate::marks::{MARKS_LEN, normalize_marks};
use crate::mask::{Mask, normalize_mask};
use crate::storage::Storage;

/// Persisted document schema version.
pub const PROGRESS_STORE_VERSION: u32 = 1;
/// Well-known storage key for the whole document.
pub const PROGRESS_STORAGE_KEY: &str = "kairem.progress.v1";
/// Entry cap; the least-recently-updated entries are evicted beyond this.
pub const PROGRESS_MAX_ENTRIES: usize = 30;

/// One saved puzzle session.
///
/// Serialized in camelCase to match the on-storage document contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// Primary key, produced by [`crate::key::make_puzzle_key`]
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub key: String,
    pub kind: PuzzleKind,
    #[serde(default, deserialize_with = "de_opt_string", skip_serializing_if = "Option::is_none")]
    pub date_ymd: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string", skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string", skip_serializing_if = "Option::is_none")]
    pub level_code: Option<String>,
    /// Current checked-cell mask (the history engine's present value)
    #[serde(default, deserialize_with = "de_mask")]
    pub checked_mask: Mask,
    #[serde(default, deserialize_with = "de_mask_vec")]
    pub undo: Vec<Mask>,
    #[serde(default, deserialize_with = "de_mask_vec")]
    pub redo: Vec<Mask>,
    /// Per-cell annotation marks
    #[serde(default, deserialize_with = "de_marks", skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<u8>>,
    #[serde(default, deserialize_with = "de_opt_int", skip_serializing_if = "Option::is_none")]
    pub move_count: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_int", skip_serializing_if = "Option::is_none")]
    pub hint_count: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_int", skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<i64>,
    /// Set once when the puzzle is first solved; absent means unsolved
    #[serde(default, deserialize_with = "de_opt_string", skip_serializing_if = "Option::is_none")]
    pub solved_at: Option<String>,
    /// Immutable after the first write
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub created_at: String,
    /// Refreshed on every upsert
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub updated_at: String,
}

impl ProgressEntry {
    /// Blank entry for a puzzle; callers fill in state before upserting.
    pub fn new(key: impl Into<String>, kind: PuzzleKind) -> Self {
        Self {
            key: key.into(),
            kind,
            date_ymd: None,
            seed: None,
            level_code: None,
            checked_mask: 0,
            undo: Vec::new(),
            redo: Vec::new(),
            marks: None,
            move_count: None,
            hint_count: None,
            time_ms: None,
            solved_at: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Whether this session has been solved.
    pub fn is_solved(&self) -> bool {
        self.solved_at.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Session history reconstructed from the persisted flat fields.
    pub fn history(&self) -> History {
        let undo: Vec<i64> = self.undo.iter().map(|&m| i64::from(m)).collect();
        let redo: Vec<i64> = self.redo.iter().map(|&m| i64::from(m)).collect();
        normalize_history(&undo, &redo, i64::from(self.checked_mask), HISTORY_LIMIT)
    }

    /// Copy a session history back into the persisted flat fields.
    pub fn set_history(&mut self, history: &History) {
        self.checked_mask = history.present;
        self.undo = history.undo.clone();
        self.redo = history.redo.clone();
    }
}

/// The persisted document: a versioned envelope around the entry map.
#[derive(Debug, Clone, Serialize)]
struct StoreDoc {
    version: u32,
    entries: BTreeMap<String, ProgressEntry>,
}

impl Default for StoreDoc {
    fn default() -> Self {
        Self {
            version: PROGRESS_STORE_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// Capacity-bounded key→entry store over an injected storage handle.
///
/// Owns all writes to the persisted document; every other component works on
/// the in-memory copies this store hands out or receives.
pub struct ProgressStore<S: Storage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
}

impl<S: Storage> ProgressStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            clock: SystemClock,
        }
    }
}

impl<S: Storage, C: Clock> ProgressStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    /// The underlying storage handle (shared with e.g. the stats watermark).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Entry under `key`, if any. Absence is not an error.
    pub fn load(&self, key: &str) -> Option<ProgressEntry> {
        self.read_doc().entries.remove(key)
    }

    /// All entries, most recently updated first. Ties are broken by key
    /// order: deterministic, not otherwise meaningful.
    pub fn list(&self) -> Vec<ProgressEntry> {
        let doc = self.read_doc();
        let mut all: Vec<ProgressEntry> = doc.entries.into_values().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        all
    }

    /// Insert or merge an entry, then evict down to the capacity bound.
    ///
    /// Merging is shallow: fields present on `entry` win, absent optional
    /// fields keep their previous values. `createdAt` survives from the first
    /// write, `updatedAt` always becomes now, and the mask/undo/redo triple
    /// is re-normalized so every persisted entry carries consistent, bounded
    /// history no matter what the caller supplied.
    ///
    /// An entry without a key is ignored rather than rejected: callers may
    /// hold partially-built entries during UI transitions.
    pub fn upsert(&mut self, entry: ProgressEntry) {
        if entry.key.is_empty() {
            log::warn!("ignoring progress upsert with empty key");
            return;
        }

        let mut doc = self.read_doc();
        let now = self.clock.now_iso();
        let prev = doc.entries.get(&entry.key).cloned();

        let created_at = prev
            .as_ref()
            .map(|p| p.created_at.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| now.clone());

        let undo: Vec<i64> = entry.undo.iter().map(|&m| i64::from(m)).collect();
        let redo: Vec<i64> = entry.redo.iter().map(|&m| i64::from(m)).collect();
        let history = normalize_history(&undo, &redo, i64::from(entry.checked_mask), HISTORY_LIMIT);

        let marks = entry
            .marks
            .map(|m| {
                let raw: Vec<i64> = m.iter().map(|&v| i64::from(v)).collect();
                normalize_marks(&raw, MARKS_LEN)
            })
            .or_else(|| prev.as_ref().and_then(|p| p.marks.clone()));

        let merged = ProgressEntry {
            key: entry.key.clone(),
            kind: entry.kind,
            date_ymd: entry
                .date_ymd
                .or_else(|| prev.as_ref().and_then(|p| p.date_ymd.clone())),
            seed: entry
                .seed
                .or_else(|| prev.as_ref().and_then(|p| p.seed.clone())),
            level_code: entry
                .level_code
                .or_else(|| prev.as_ref().and_then(|p| p.level_code.clone())),
            checked_mask: history.present,
            undo: history.undo,
            redo: history.redo,
            marks,
            move_count: entry
                .move_count
                .or_else(|| prev.as_ref().and_then(|p| p.move_count)),
            hint_count: entry
                .hint_count
                .or_else(|| prev.as_ref().and_then(|p| p.hint_count)),
            time_ms: entry
                .time_ms
                .or_else(|| prev.as_ref().and_then(|p| p.time_ms)),
            solved_at: entry
                .solved_at
                .or_else(|| prev.as_ref().and_then(|p| p.solved_at.clone())),
            created_at,
            updated_at: now,
        };

        doc.entries.insert(merged.key.clone(), merged);
        evict_to_cap(&mut doc.entries);
        self.write_doc(&doc);
    }

    /// Remove the entry under `key`; no-op when absent.
    pub fn delete(&mut self, key: &str) {
        let mut doc = self.read_doc();
        if doc.entries.remove(key).is_some() {
            self.write_doc(&doc);
        }
    }

    /// Remove the entire persisted document.
    pub fn clear(&mut self) {
        self.storage.remove_item(PROGRESS_STORAGE_KEY);
    }

    fn read_doc(&self) -> StoreDoc {
        match self.storage.get_item(PROGRESS_STORAGE_KEY) {
            Some(raw) => decode_doc(&raw),
            None => StoreDoc::default(),
        }
    }

    fn write_doc(&mut self, doc: &StoreDoc) {
        match serde_json::to_string(doc) {
            Ok(json) => {
                self.storage.set_item(PROGRESS_STORAGE_KEY, &json);
                log::debug!("progress saved ({} entries)", doc.entries.len());
            }
            Err(err) => log::warn!("progress document failed to serialize: {err}"),
        }
    }
}

/// Decode boundary for the persisted document.
///
/// Unknown version, non-object shapes and unparseable JSON all degrade to a
/// fresh empty document. Individual entries that fail to decode (e.g. an
/// unknown kind) are dropped while the rest of the document survives.
fn decode_doc(raw: &str) -> StoreDoc {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        log::warn!("progress document is not valid JSON, starting fresh");
        return StoreDoc::default();
    };
    let Some(obj) = value.as_object() else {
        return StoreDoc::default();
    };
    if obj.get("version").and_then(Value::as_u64) != Some(u64::from(PROGRESS_STORE_VERSION)) {
        log::warn!("progress document has an unknown version, starting fresh");
        return StoreDoc::default();
    }
    let Some(raw_entries) = obj.get("entries").and_then(Value::as_object) else {
        return StoreDoc::default();
    };

    let mut entries = BTreeMap::new();
    for (key, raw_entry) in raw_entries {
        match serde_json::from_value::<ProgressEntry>(raw_entry.clone()) {
            Ok(mut entry) => {
                // The map key is authoritative
                entry.key = key.clone();
                entries.insert(key.clone(), entry);
            }
            Err(err) => log::warn!("dropping malformed progress entry {key}: {err}"),
        }
    }
    StoreDoc {
        version: PROGRESS_STORE_VERSION,
        entries,
    }
}

/// Evict the least-recently-updated entries until at the cap.
fn evict_to_cap(entries: &mut BTreeMap<String, ProgressEntry>) {
    if entries.len() <= PROGRESS_MAX_ENTRIES {
        return;
    }
    let mut by_age: Vec<(String, String)> = entries
        .iter()
        .map(|(key, e)| (e.updated_at.clone(), key.clone()))
        .collect();
    by_age.sort();
    let excess = entries.len() - PROGRESS_MAX_ENTRIES;
    for (_, key) in by_age.into_iter().take(excess) {
        log::debug!("evicting stale progress entry {key}");
        entries.remove(&key);
    }
}

fn mask_from_value(v: &Value) -> Mask {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                normalize_mask(i)
            } else if let Some(u) = n.as_u64() {
                u as u32
            } else if let Some(f) = n.as_f64().filter(|f| f.is_finite()) {
                normalize_mask(f as i64)
            } else {
                0
            }
        }
        Value::String(s) => {
            let t = s.trim();
            if let Ok(u) = t.parse::<u128>() {
                u as u32
            } else if let Ok(i) = t.parse::<i128>() {
                i as u32
            } else {
                0
            }
        }
        _ => 0,
    }
}

fn de_mask<'de, D: Deserializer<'de>>(d: D) -> Result<Mask, D::Error> {
    Ok(mask_from_value(&Value::deserialize(d)?))
}

fn de_mask_vec<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Mask>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().map(mask_from_value).collect(),
        _ => Vec::new(),
    })
}

fn de_marks<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => {
            let raw: Vec<i64> = items.iter().map(|v| v.as_i64().unwrap_or(-1)).collect();
            Some(normalize_marks(&raw, MARKS_LEN))
        }
        _ => None,
    })
}

fn de_opt_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        _ => None,
    })
}

fn de_opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn de_string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;

    /// Deterministic clock: every call is one millisecond later.
    pub(crate) struct TickClock(pub(crate) Cell<u32>);

    impl TickClock {
        pub(crate) fn new() -> Self {
            Self(Cell::new(0))
        }
    }

    impl Clock for TickClock {
        fn now_iso(&self) -> String {
            let n = self.0.get();
            self.0.set(n + 1);
            format!("2026-01-01T00:00:{:02}.{:03}Z", n / 1000, n % 1000)
        }
    }

    /// A medium that is never available: reads empty, drops writes.
    struct DeadStorage;

    impl Storage for DeadStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }
        fn set_item(&mut self, _key: &str, _value: &str) {}
        fn remove_item(&mut self, _key: &str) {}
    }

    fn test_store() -> ProgressStore<MemoryStorage, TickClock> {
        ProgressStore::with_clock(MemoryStorage::new(), TickClock::new())
    }

    fn daily_entry(key: &str, ymd: &str) -> ProgressEntry {
        let mut e = ProgressEntry::new(key, PuzzleKind::Daily);
        e.date_ymd = Some(ymd.to_string());
        e
    }

    #[test]
    fn test_upsert_then_load_round_trip() {
        let mut store = test_store();
        let mut entry = daily_entry("daily:2025-12-21", "2025-12-21");
        entry.checked_mask = 0b101;
        entry.undo = vec![0, 1];
        entry.move_count = Some(4);

        store.upsert(entry);
        let loaded = store.load("daily:2025-12-21").unwrap();
        assert_eq!(loaded.kind, PuzzleKind::Daily);
        assert_eq!(loaded.date_ymd.as_deref(), Some("2025-12-21"));
        assert_eq!(loaded.checked_mask, 0b101);
        assert_eq!(loaded.undo, vec![0, 1]);
        assert_eq!(loaded.move_count, Some(4));
        assert!(!loaded.created_at.is_empty());
        assert_eq!(loaded.created_at, loaded.updated_at);

        assert_eq!(store.load("daily:2099-01-01"), None);
    }

    #[test]
    fn test_upsert_preserves_created_at_and_refreshes_updated_at() {
        let mut store = test_store();
        store.upsert(daily_entry("daily:2025-12-21", "2025-12-21"));
        let first = store.load("daily:2025-12-21").unwrap();

        store.upsert(daily_entry("daily:2025-12-21", "2025-12-21"));
        let second = store.load("daily:2025-12-21").unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at > first.updated_at);
    }

    #[test]
    fn test_upsert_merges_onto_previous_entry() {
        let mut store = test_store();
        let mut entry = daily_entry("daily:2025-12-21", "2025-12-21");
        entry.solved_at = Some("2025-12-21T10:00:00.000Z".into());
        entry.hint_count = Some(2);
        store.upsert(entry);

        // A later partial save without solvedAt/hintCount keeps both
        let mut update = ProgressEntry::new("daily:2025-12-21", PuzzleKind::Daily);
        update.checked_mask = 7;
        update.move_count = Some(9);
        store.upsert(update);

        let merged = store.load("daily:2025-12-21").unwrap();
        assert_eq!(merged.solved_at.as_deref(), Some("2025-12-21T10:00:00.000Z"));
        assert_eq!(merged.hint_count, Some(2));
        assert_eq!(merged.move_count, Some(9));
        assert_eq!(merged.checked_mask, 7);
        assert_eq!(merged.date_ymd.as_deref(), Some("2025-12-21"));
    }

    #[test]
    fn test_upsert_ignores_empty_key() {
        let mut store = test_store();
        store.upsert(ProgressEntry::new("", PuzzleKind::Seed));
        assert!(store.list().is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_upsert_normalizes_history_and_marks() {
        let mut store = test_store();
        let mut entry = ProgressEntry::new("seed:1", PuzzleKind::Seed);
        entry.undo = (0..300).collect();
        entry.marks = Some(vec![0, 1, 2, 9, 200]);
        store.upsert(entry);

        let saved = store.load("seed:1").unwrap();
        assert_eq!(saved.undo.len(), HISTORY_LIMIT);
        assert_eq!(saved.undo[0], 100);
        let marks = saved.marks.unwrap();
        assert_eq!(marks.len(), MARKS_LEN);
        assert_eq!(&marks[..5], &[0, 1, 2, 0, 0]);
    }

    #[test]
    fn test_eviction_keeps_most_recently_updated() {
        let mut store = test_store();
        for i in 0..35 {
            store.upsert(ProgressEntry::new(format!("seed:{i:02}"), PuzzleKind::Seed));
        }
        let listed = store.list();
        assert_eq!(listed.len(), PROGRESS_MAX_ENTRIES);
        // The five oldest-updated keys are gone
        for i in 0..5 {
            assert!(store.load(&format!("seed:{i:02}")).is_none());
        }
        for i in 5..35 {
            assert!(store.load(&format!("seed:{i:02}")).is_some());
        }
    }

    #[test]
    fn test_touching_an_entry_saves_it_from_eviction() {
        let mut store = test_store();
        for i in 0..30 {
            store.upsert(ProgressEntry::new(format!("seed:{i:02}"), PuzzleKind::Seed));
        }
        // Refresh the oldest entry, then push one past the cap
        store.upsert(ProgressEntry::new("seed:00", PuzzleKind::Seed));
        store.upsert(ProgressEntry::new("seed:30", PuzzleKind::Seed));

        assert!(store.load("seed:00").is_some());
        assert!(store.load("seed:01").is_none());
    }

    #[test]
    fn test_list_orders_by_updated_at_descending() {
        let mut store = test_store();
        store.upsert(ProgressEntry::new("seed:a", PuzzleKind::Seed));
        store.upsert(ProgressEntry::new("seed:b", PuzzleKind::Seed));
        store.upsert(ProgressEntry::new("seed:a", PuzzleKind::Seed));

        let keys: Vec<String> = store.list().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["seed:a", "seed:b"]);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut store = test_store();
        store.upsert(ProgressEntry::new("seed:a", PuzzleKind::Seed));
        store.upsert(ProgressEntry::new("seed:b", PuzzleKind::Seed));

        store.delete("seed:a");
        assert!(store.load("seed:a").is_none());
        // Deleting an absent key is a no-op
        store.delete("seed:a");
        assert_eq!(store.list().len(), 1);

        store.clear();
        assert!(store.list().is_empty());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_version_mismatch_reads_as_empty() {
        let mut store = test_store();
        store.storage_mut().set_item(
            PROGRESS_STORAGE_KEY,
            r#"{"version":2,"entries":{"seed:1":{"key":"seed:1","kind":"seed","checkedMask":1,"undo":[],"redo":[]}}}"#,
        );
        assert!(store.list().is_empty());
        assert!(store.load("seed:1").is_none());
    }

    #[test]
    fn test_corrupt_document_reads_as_empty() {
        let mut store = test_store();
        store.storage_mut().set_item(PROGRESS_STORAGE_KEY, "{not json");
        assert!(store.list().is_empty());

        store.storage_mut().set_item(PROGRESS_STORAGE_KEY, "[1,2,3]");
        assert!(store.list().is_empty());

        store.storage_mut().set_item(PROGRESS_STORAGE_KEY, r#"{"version":1,"entries":7}"#);
        assert!(store.list().is_empty());

        // A fresh upsert recovers the document
        store.upsert(ProgressEntry::new("seed:1", PuzzleKind::Seed));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_legacy_wide_and_string_masks_load() {
        let mut store = test_store();
        store.storage_mut().set_item(
            PROGRESS_STORAGE_KEY,
            r#"{"version":1,"entries":{"seed:1":{
                "kind":"seed","seed":"1",
                "checkedMask":"4294967298",
                "undo":["5",7.9,-1,"junk"],
                "redo":4294967296,
                "updatedAt":"2026-01-01T00:00:00.000Z"
            }}}"#,
        );
        let e = store.load("seed:1").unwrap();
        // 2^32 + 2 wraps to 2; the map key is authoritative for `key`
        assert_eq!(e.key, "seed:1");
        assert_eq!(e.checked_mask, 2);
        assert_eq!(e.undo, vec![5, 7, u32::MAX, 0]);
        // Non-array stacks read as empty
        assert_eq!(e.redo, Vec::<Mask>::new());
    }

    #[test]
    fn test_malformed_entry_is_dropped_rest_survives() {
        let mut store = test_store();
        store.storage_mut().set_item(
            PROGRESS_STORAGE_KEY,
            r#"{"version":1,"entries":{
                "weekly:1":{"kind":"weekly"},
                "seed:1":{"kind":"seed","seed":"1","checkedMask":3,
                          "updatedAt":"2026-01-01T00:00:00.000Z"}
            }}"#,
        );
        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].key, "seed:1");
        assert_eq!(listed[0].checked_mask, 3);
    }

    #[test]
    fn test_dead_storage_degrades_to_noop() {
        let mut store = ProgressStore::with_clock(DeadStorage, TickClock::new());
        store.upsert(ProgressEntry::new("seed:1", PuzzleKind::Seed));
        assert!(store.load("seed:1").is_none());
        assert!(store.list().is_empty());
        store.delete("seed:1");
        store.clear();
    }

    #[test]
    fn test_entry_history_round_trip() {
        let mut h = History::new(0);
        h.push(1);
        h.push(3);
        h.undo();

        let mut entry = ProgressEntry::new("seed:1", PuzzleKind::Seed);
        entry.set_history(&h);
        assert_eq!(entry.checked_mask, 1);
        assert_eq!(entry.undo, vec![0]);
        assert_eq!(entry.redo, vec![3]);

        let mut store = test_store();
        store.upsert(entry);
        let restored = store.load("seed:1").unwrap().history();
        assert_eq!(restored, h);
    }

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let mut store = test_store();
        let mut entry = daily_entry("daily:2025-12-21", "2025-12-21");
        entry.time_ms = Some(1000);
        entry.solved_at = Some("2025-12-21T10:00:00.000Z".into());
        store.upsert(entry);

        let raw = store.storage().get_item(PROGRESS_STORAGE_KEY).unwrap();
        for field in [
            "\"version\"",
            "\"entries\"",
            "\"dateYmd\"",
            "\"checkedMask\"",
            "\"timeMs\"",
            "\"solvedAt\"",
            "\"createdAt\"",
            "\"updatedAt\"",
        ] {
            assert!(raw.contains(field), "missing {field} in {raw}");
        }
        // Absent optional fields are omitted, not null
        assert!(!raw.contains("\"seed\":null"));
        assert!(!raw.contains("null"));
    }
}
