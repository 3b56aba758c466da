use crate::error::ConfigError;

/// Settings for one background removal run
///
/// `MatteConfig` is an immutable value object. Both numeric parameters
/// are validated to lie within `[0, 1]` whenever a config is built, so a
/// run never has to reject its configuration halfway through an image.
///
/// * `sensitivity` - Higher values lower the background threshold, so
///   fewer pixels are removed
/// * `smoothness` - Opacity given to foreground pixels bordering removed
///   background, when `auto_enhance` is on
/// * `preserve_hair` - Gives partial opacity to pixels just above the
///   background threshold
/// * `auto_enhance` - Enables edge smoothing
///
/// # Examples
///
/// ```
/// use imageops_matte::MatteConfig;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MatteConfig::new(0.7, 0.4)?
///     .with_preserve_hair(true)
///     .with_auto_enhance(true);
///
/// assert_eq!(config.sensitivity(), 0.7);
/// assert!(config.preserve_hair());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigFields")
)]
pub struct MatteConfig {
    sensitivity: f32,
    smoothness: f32,
    preserve_hair: bool,
    auto_enhance: bool,
}

impl MatteConfig {
    /// Creates a config with both refinement passes disabled.
    ///
    /// # Errors
    ///
    /// * `ConfigError::OutOfRange` - When either value is outside `[0, 1]` or not finite
    pub fn new(sensitivity: f32, smoothness: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            sensitivity: validate_unit("sensitivity", sensitivity)?,
            smoothness: validate_unit("smoothness", smoothness)?,
            preserve_hair: false,
            auto_enhance: false,
        })
    }

    /// Creates a config from slider percentages in `0..=100`.
    ///
    /// # Errors
    ///
    /// * `ConfigError::OutOfRange` - When either percentage exceeds 100
    pub fn from_percentages(sensitivity: u8, smoothness: u8) -> Result<Self, ConfigError> {
        Self::new(
            f32::from(sensitivity) / 100.0,
            f32::from(smoothness) / 100.0,
        )
    }

    pub fn with_sensitivity(self, sensitivity: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            sensitivity: validate_unit("sensitivity", sensitivity)?,
            ..self
        })
    }

    pub fn with_smoothness(self, smoothness: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            smoothness: validate_unit("smoothness", smoothness)?,
            ..self
        })
    }

    #[must_use]
    pub const fn with_preserve_hair(self, preserve_hair: bool) -> Self {
        Self {
            preserve_hair,
            ..self
        }
    }

    #[must_use]
    pub const fn with_auto_enhance(self, auto_enhance: bool) -> Self {
        Self {
            auto_enhance,
            ..self
        }
    }

    #[inline]
    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    #[inline]
    pub const fn smoothness(&self) -> f32 {
        self.smoothness
    }

    #[inline]
    pub const fn preserve_hair(&self) -> bool {
        self.preserve_hair
    }

    #[inline]
    pub const fn auto_enhance(&self) -> bool {
        self.auto_enhance
    }

    /// Whether any refinement pass will run.
    #[inline]
    pub const fn refines(&self) -> bool {
        self.preserve_hair || self.auto_enhance
    }
}

impl Default for MatteConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.5,
            smoothness: 0.5,
            preserve_hair: false,
            auto_enhance: false,
        }
    }
}

fn validate_unit(parameter: &'static str, value: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { parameter, value })
    }
}

/// Unvalidated field set that deserialisation goes through
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "MatteConfig")]
struct ConfigFields {
    sensitivity: f32,
    smoothness: f32,
    #[serde(default)]
    preserve_hair: bool,
    #[serde(default)]
    auto_enhance: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigFields> for MatteConfig {
    type Error = ConfigError;

    fn try_from(fields: ConfigFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.sensitivity, fields.smoothness)?
            .with_preserve_hair(fields.preserve_hair)
            .with_auto_enhance(fields.auto_enhance))
    }
}
