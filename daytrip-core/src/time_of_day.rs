//! Times of day an activity can be held.
//!
//! The enum carries the fixed total order used by the scorer:
//! morning < day < evening < night.
//!
//! # Examples
//! ```
//! use daytrip_core::TimeOfDay;
//!
//! assert_eq!(TimeOfDay::Evening.as_str(), "evening");
//! assert_eq!(TimeOfDay::Night.ordinal(), 3);
//! ```

/// A slot in the day, ordered from morning to night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", rename_all = "lowercase"))]
pub enum TimeOfDay {
    /// Early in the day.
    #[default]
    Morning,
    /// Daytime hours.
    Day,
    /// Early evening.
    Evening,
    /// Late at night.
    Night,
}

impl TimeOfDay {
    /// Return the slot as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use daytrip_core::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::Morning.as_str(), "morning");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Position of the slot in the day order, `0..=3`.
    ///
    /// # Examples
    /// ```
    /// use daytrip_core::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::Morning.ordinal(), 0);
    /// assert_eq!(TimeOfDay::Night.ordinal(), 3);
    /// ```
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Morning => 0,
            Self::Day => 1,
            Self::Evening => 2,
            Self::Night => 3,
        }
    }

    /// Map a free-form label to a slot, defaulting to [`Self::Morning`].
    ///
    /// Catalog entries are trusted but not validated; an unrecognised label
    /// scores as the lowest slot rather than erroring.
    ///
    /// # Examples
    /// ```
    /// use daytrip_core::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_label("night"), TimeOfDay::Night);
    /// assert_eq!(TimeOfDay::from_label("brunch"), TimeOfDay::Morning);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "day" => Self::Day,
            "evening" => Self::Evening,
            "night" => Self::Night,
            _ => Self::Morning,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "day" => Ok(Self::Day),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(format!("unknown time of day '{s}'")),
        }
    }
}

impl From<String> for TimeOfDay {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}
