use super::error::Result;
use crate::app::domain::schema::SettingsSchema;

/// Host-side settings editor. It renders whatever schema it was last given.
pub trait SettingsPanel {
    fn define(&mut self, schema: &SettingsSchema) -> Result<()>;
}

/// Keeps the most recent schema, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPanel {
    last: Option<SettingsSchema>,
    defines: usize,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&SettingsSchema> {
        self.last.as_ref()
    }

    /// How many times the schema was (re)registered.
    pub fn defines(&self) -> usize {
        self.defines
    }
}

impl SettingsPanel for RecordingPanel {
    fn define(&mut self, schema: &SettingsSchema) -> Result<()> {
        self.last = Some(schema.clone());
        self.defines += 1;
        Ok(())
    }
}
