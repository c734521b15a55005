// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that touch the filesystem:
//
//   artifact_store.rs — Reads encoder and model artifacts from
//                       the artifacts directory, validates them
//                       against the feature contract, and turns
//                       every failure into a StartupError that
//                       names the offending file.
//
// Keeping file access here means the domain, data and ml layers
// stay pure and are unit-testable without touching disk.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Artifact loading with fail-fast startup errors
pub mod artifact_store;
