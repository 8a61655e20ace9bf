/// Runtime values.
///
/// Defines the `Value` enum, the `Function` value that pairs a declaration
/// with its closure scope, conversions used by the evaluator, and the two
/// renderings of a value: the rounded display form shown to users and the
/// lossless source form produced by `inspect`.
pub mod core;
