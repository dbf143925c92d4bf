use chrono::Duration;
use horizon_core::EngineConfig;

/// Convert an energy quantity delivered over `over` into the equivalent power
///
/// The result is expressed relative to the configured energy/power ratio,
/// e.g. with a ratio of one hour, 10 units of energy over 2 hours give 5.
pub fn energy_to_power(config: &EngineConfig, energy: f64, over: Duration) -> f64 {
    energy * (minutes(config.energy_to_power_ratio) / minutes(over))
}

/// Convert a power held for `over` into the delivered energy
pub fn power_to_energy(config: &EngineConfig, power: f64, over: Duration) -> f64 {
    power * (minutes(over) / minutes(config.energy_to_power_ratio))
}

fn minutes(duration: Duration) -> f64 {
    duration.num_minutes() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_energy_to_power_hourly_ratio() {
        let config = EngineConfig::default();
        assert_relative_eq!(energy_to_power(&config, 10.0, Duration::hours(2)), 5.0);
        assert_relative_eq!(energy_to_power(&config, 10.0, Duration::minutes(15)), 40.0);
    }

    #[test]
    fn test_power_to_energy_inverts() {
        let config = EngineConfig {
            energy_to_power_ratio: Duration::days(1),
            ..Default::default()
        };
        let over = Duration::hours(6);
        let power = energy_to_power(&config, 12.0, over);
        assert_relative_eq!(power, 48.0);
        assert_relative_eq!(power_to_energy(&config, power, over), 12.0);
    }
}
