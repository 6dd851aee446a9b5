//! SQL schema for the Attire SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Outfit documents. Typed columns for queried fields; open-shaped fields
-- (item references, last feedback) are JSON text.
CREATE TABLE IF NOT EXISTS outfits (
    outfit_id        TEXT PRIMARY KEY,
    user_id          TEXT NOT NULL,
    name             TEXT NOT NULL,
    style            TEXT NOT NULL,
    mood             TEXT NOT NULL,
    items_json       TEXT NOT NULL DEFAULT '[]',
    occasion         TEXT NOT NULL,
    confidence_score REAL NOT NULL DEFAULT 0.0,
    reasoning        TEXT NOT NULL,
    last_feedback    TEXT,            -- JSON-encoded Feedback or NULL
    created_at       TEXT NOT NULL,   -- ISO 8601 UTC
    updated_at       TEXT
);

-- Wardrobe item documents. The id is the document key; everything else
-- lives in the JSON payload.
CREATE TABLE IF NOT EXISTS wardrobe_items (
    item_id  TEXT PRIMARY KEY,
    doc_json TEXT NOT NULL
);

-- One row per feedback submission; rows are never updated or deleted here.
-- Deliberately no foreign key to outfits: deleting an outfit does not
-- cascade to its feedback records.
CREATE TABLE IF NOT EXISTS outfit_feedback (
    feedback_id TEXT PRIMARY KEY,
    outfit_id   TEXT NOT NULL,
    user_id     TEXT NOT NULL,
    rating      INTEGER NOT NULL,
    category    TEXT NOT NULL,    -- 'like' | 'dislike' | 'comment'
    comment     TEXT,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS outfits_user_idx    ON outfits(user_id);
CREATE INDEX IF NOT EXISTS feedback_outfit_idx ON outfit_feedback(outfit_id);

PRAGMA user_version = 1;
";
