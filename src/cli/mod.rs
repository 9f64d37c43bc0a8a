pub mod history;
pub mod lookup;
pub mod plan;

use mealslot_gateway::HttpGateway;
use mealslot_mealplan::Goals;
use time::{Date, macros::format_description};

pub fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// `DAY=CUPS`, days counted from 1.
pub fn parse_water(value: &str) -> Result<(u16, u8), String> {
    let (day, cups) = value
        .split_once('=')
        .ok_or_else(|| format!("expected DAY=CUPS, got {value}"))?;

    let day = day
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("invalid day {day}: {e}"))?;
    if day == 0 {
        return Err("days are counted from 1".to_owned());
    }

    let cups = cups
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid cups {cups}: {e}"))?;

    Ok((day, cups))
}

pub fn gateway(config: &mealslot::Config) -> anyhow::Result<HttpGateway> {
    Ok(HttpGateway::new((&config.gateway).into())?)
}

pub fn goals(config: &mealslot::Config) -> anyhow::Result<Goals> {
    Ok(Goals::new(
        config.planner.calorie_goal,
        config.planner.water_goal,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_water() {
        assert_eq!(parse_water("3=10"), Ok((3, 10)));
        assert_eq!(parse_water(" 1 = 0 "), Ok((1, 0)));
        assert!(parse_water("0=4").is_err());
        assert!(parse_water("3").is_err());
        assert!(parse_water("3=lots").is_err());
        assert!(parse_water("3=300").is_err());
    }
}
