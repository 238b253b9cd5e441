use crate::types::err::ConfigError;

/// A configuration value, bounded by a minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || value > self.max {
            log::error!("! Value out of bounds for {}", self.name);
            return Err(ConfigError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
