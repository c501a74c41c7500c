/// Pricing errors. The add-on menu is closed, so these mark caller bugs
/// rather than user input problems.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("unknown add-on key: {key}")]
    UnknownAddOn { key: String },
}
