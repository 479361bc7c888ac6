//! Seed the policy pages every storefront ships with.

use mp_core::CoreResult;
use mp_engine::Migration;

const DEFAULT_SLUGS: &str = "('privacy-policy', 'terms-of-service', 'refund-policy')";

pub fn migration() -> CoreResult<Migration> {
    Migration::up_sql(
        "002_default_pages",
        "default pages",
        "Seed placeholder privacy, terms, and refund pages",
        "INSERT INTO content.pages (slug, title, body) VALUES
             ('privacy-policy',   'Privacy Policy',   'Placeholder privacy policy.'),
             ('terms-of-service', 'Terms of Service', 'Placeholder terms of service.'),
             ('refund-policy',    'Refund Policy',    'Placeholder refund policy.')
         ON CONFLICT (slug) DO NOTHING;",
    )
    .map(|m| {
        m.with_down_sql(format!(
            "DELETE FROM content.pages WHERE slug IN {DEFAULT_SLUGS};"
        ))
    })
}
