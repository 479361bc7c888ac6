//! Order and payment bookkeeping tables.
//!
//! Forward-only: dropping financial records is an operator decision made
//! outside the migration engine, so no reverse procedure is provided.

use mp_core::CoreResult;
use mp_engine::Migration;

pub fn migration() -> CoreResult<Migration> {
    Migration::up_sql(
        "004_order_ledger",
        "order ledger",
        "Create order and payment bookkeeping tables",
        r#"
CREATE TABLE IF NOT EXISTS shop.orders (
    id             INTEGER PRIMARY KEY,
    customer_email VARCHAR NOT NULL,
    status         VARCHAR NOT NULL DEFAULT 'pending',
    total_cents    BIGINT NOT NULL,
    placed_at      TIMESTAMP NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS shop.payments (
    id           INTEGER PRIMARY KEY,
    order_id     INTEGER NOT NULL REFERENCES shop.orders (id),
    provider     VARCHAR NOT NULL,
    amount_cents BIGINT NOT NULL,
    state        VARCHAR NOT NULL DEFAULT 'created',
    created_at   TIMESTAMP NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_payments_order ON shop.payments (order_id);
"#,
    )
}
