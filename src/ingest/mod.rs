/// Upstream data sources for the tsunami hazard service.
///
/// Everything here produces a wave height (or a record carrying one) for
/// the hazard core to evaluate; nothing here renders or stores anything.
///
/// Submodules:
/// - `prediction` — blocking HTTP client for the prediction backend.
/// - `push` — push-notification payload decoding.

pub mod prediction;
pub mod push;
