use ecoroute_core::model::TravelMode;
use serde::{Deserialize, Serialize};

/// fixed travel parameters for one travel mode.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FixedSpeedModeConfig {
    /// average travel speed in km/h
    pub speed_kph: f64,
    /// ratio of network distance to great-circle distance, at least 1.0
    pub circuity: f64,
    /// time added to every trip, such as access and waiting time for transit
    #[serde(default)]
    pub fixed_delay_minutes: f64,
}

impl FixedSpeedModeConfig {
    pub fn new(speed_kph: f64, circuity: f64, fixed_delay_minutes: f64) -> FixedSpeedModeConfig {
        FixedSpeedModeConfig {
            speed_kph,
            circuity,
            fixed_delay_minutes,
        }
    }
}

/// configures a [`super::FixedSpeedProvider`]. a mode without parameters is
/// not served by the provider.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FixedSpeedConfig {
    pub driving: Option<FixedSpeedModeConfig>,
    pub walking: Option<FixedSpeedModeConfig>,
    pub cycling: Option<FixedSpeedModeConfig>,
    pub transit: Option<FixedSpeedModeConfig>,
    /// number of candidates returned when alternatives are requested
    pub alternative_count: usize,
    /// additional circuity applied to each successive alternative
    pub alternative_detour: f64,
    /// multiplier on driving speed when the traveler avoids highways
    pub highway_avoidance_speed_factor: f64,
}

impl Default for FixedSpeedConfig {
    fn default() -> Self {
        Self {
            driving: Some(FixedSpeedModeConfig::new(50.0, 1.3, 0.0)),
            walking: Some(FixedSpeedModeConfig::new(5.0, 1.2, 0.0)),
            cycling: Some(FixedSpeedModeConfig::new(15.0, 1.25, 0.0)),
            transit: Some(FixedSpeedModeConfig::new(25.0, 1.4, 8.0)),
            alternative_count: 3,
            alternative_detour: 0.08,
            highway_avoidance_speed_factor: 0.8,
        }
    }
}

impl FixedSpeedConfig {
    pub fn mode(&self, mode: TravelMode) -> Option<&FixedSpeedModeConfig> {
        match mode {
            TravelMode::Driving => self.driving.as_ref(),
            TravelMode::Walking => self.walking.as_ref(),
            TravelMode::Cycling => self.cycling.as_ref(),
            TravelMode::Transit => self.transit.as_ref(),
        }
    }

    /// checks that every configured value can produce a valid route.
    pub fn validate(&self) -> Result<(), String> {
        for mode in TravelMode::ALL {
            if let Some(c) = self.mode(mode) {
                if !c.speed_kph.is_finite() || c.speed_kph <= 0.0 {
                    return Err(format!("{mode} speed_kph must be positive, found {}", c.speed_kph));
                }
                if !c.circuity.is_finite() || c.circuity < 1.0 {
                    return Err(format!("{mode} circuity must be >= 1.0, found {}", c.circuity));
                }
                if !c.fixed_delay_minutes.is_finite() || c.fixed_delay_minutes < 0.0 {
                    return Err(format!(
                        "{mode} fixed_delay_minutes must be non-negative, found {}",
                        c.fixed_delay_minutes
                    ));
                }
            }
        }
        if self.alternative_count == 0 {
            return Err(String::from("alternative_count must be at least 1"));
        }
        if !self.alternative_detour.is_finite() || self.alternative_detour < 0.0 {
            return Err(format!(
                "alternative_detour must be non-negative, found {}",
                self.alternative_detour
            ));
        }
        let f = self.highway_avoidance_speed_factor;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(format!(
                "highway_avoidance_speed_factor must be in (0, 1], found {f}"
            ));
        }
        Ok(())
    }
}
