//! Initial content tables: banners, FAQs, and CMS pages.

use mp_core::CoreResult;
use mp_engine::Migration;

pub fn migration() -> CoreResult<Migration> {
    Migration::up_sql(
        "001_initial_content",
        "initial content",
        "Create the content schema with banners, FAQs, and pages",
        r#"
CREATE SCHEMA IF NOT EXISTS content;

CREATE TABLE IF NOT EXISTS content.banners (
    id        INTEGER PRIMARY KEY,
    title     VARCHAR NOT NULL,
    image_url VARCHAR NOT NULL,
    link_url  VARCHAR,
    position  INTEGER NOT NULL DEFAULT 0,
    active    BOOLEAN NOT NULL DEFAULT true
);

CREATE TABLE IF NOT EXISTS content.faqs (
    id       INTEGER PRIMARY KEY,
    question VARCHAR NOT NULL,
    answer   VARCHAR NOT NULL,
    position INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS content.pages (
    slug       VARCHAR PRIMARY KEY,
    title      VARCHAR NOT NULL,
    body       VARCHAR NOT NULL,
    updated_at TIMESTAMP NOT NULL DEFAULT now()
);
"#,
    )
    .map(|m| {
        m.with_down_sql(
            "DROP TABLE IF EXISTS content.pages;
             DROP TABLE IF EXISTS content.faqs;
             DROP TABLE IF EXISTS content.banners;",
        )
    })
}
