use crate::colour_correction::common::error::Result;
use crate::colour_correction::store::properties::Properties;

/// Persistence medium for the correction settings.
pub trait KeyValueStore {
    /// Reads every stored entry. `Ok(None)` means the store does not exist yet.
    fn load(&self) -> Result<Option<Properties>>;

    /// Replaces the stored entries with `entries`.
    fn persist(&mut self, entries: &Properties) -> Result<()>;
}
