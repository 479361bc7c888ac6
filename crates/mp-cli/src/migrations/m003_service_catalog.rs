//! Service catalog: categories and the services sold through them.

use mp_core::CoreResult;
use mp_engine::Migration;

pub fn migration() -> CoreResult<Migration> {
    Migration::up_sql(
        "003_service_catalog",
        "service catalog",
        "Create the shop schema with service categories and services",
        r#"
CREATE SCHEMA IF NOT EXISTS shop;

CREATE TABLE IF NOT EXISTS shop.service_categories (
    id       INTEGER PRIMARY KEY,
    name     VARCHAR NOT NULL,
    position INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS shop.services (
    id          INTEGER PRIMARY KEY,
    category_id INTEGER NOT NULL REFERENCES shop.service_categories (id),
    name        VARCHAR NOT NULL,
    summary     VARCHAR,
    price_cents BIGINT NOT NULL,
    active      BOOLEAN NOT NULL DEFAULT true
);
"#,
    )
    .map(|m| {
        m.with_down_sql(
            "DROP TABLE IF EXISTS shop.services;
             DROP TABLE IF EXISTS shop.service_categories;",
        )
    })
}
