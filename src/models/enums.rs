use serde::{Deserialize, Serialize};

/// Parse failure for a string-backed enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SymptomId {
    Dysphagia => "dysphagia",
    WeightLoss => "weight_loss",
    ChestPain => "chest_pain",
    Reflux => "reflux",
    TobaccoAlcohol => "tobacco_alcohol",
    Anemia => "anemia",
});

str_enum!(ExposureLevel {
    None => "none",
    Moderate => "moderate",
    High => "high",
});

impl SymptomId {
    /// Fixed key order — also the radar axis order.
    pub const ALL: [SymptomId; 6] = [
        SymptomId::Dysphagia,
        SymptomId::WeightLoss,
        SymptomId::ChestPain,
        SymptomId::Reflux,
        SymptomId::TobaccoAlcohol,
        SymptomId::Anemia,
    ];

    /// Display label for charts and detection feedback.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dysphagia => "Swallowing difficulty",
            Self::WeightLoss => "Weight loss",
            Self::ChestPain => "Chest pain",
            Self::Reflux => "Gastric reflux",
            Self::TobaccoAlcohol => "Tobacco/Alcohol",
            Self::Anemia => "Anemia",
        }
    }

    /// Whether this symptom holds a 0–10 intensity value.
    pub fn is_intensity(&self) -> bool {
        matches!(self, Self::Dysphagia | Self::ChestPain | Self::Anemia)
    }
}

impl ExposureLevel {
    /// Selector label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl Default for ExposureLevel {
    fn default() -> Self {
        Self::None
    }
}
