// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types and traits describing what the system works
// with: typed categories, feature vectors, predictions, and
// the error taxonomy.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO HTTP or CLI types
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Closed label sets for categorical form fields
pub mod category;

// StartupError / ValidationError / PredictError
pub mod error;

// Ordered feature schema and the vector builder
pub mod features;

// Binary labels and their human-readable messages
pub mod prediction;

// Core abstractions (traits) that other layers implement
pub mod traits;
