//! SQL migrations compiled into the binary, in application order

/// `(migration id, SQL)` pairs; ids are recorded in `schema_version`
pub(crate) const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_initial_schema",
        include_str!("../../migrations/001_initial_schema.sql"),
    ),
    (
        "002_seed_imports",
        include_str!("../../migrations/002_seed_imports.sql"),
    ),
];
