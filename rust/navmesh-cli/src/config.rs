use std::env;

use anyhow::{bail, Context};
use navmesh_core::Winding;

/// Overrides read from `NAVMESH_*` environment variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub log_json: bool,
    pub winding: Option<Winding>,
    pub funnel_epsilon: Option<f64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let log_json = lookup("NAVMESH_LOG_JSON")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let winding = lookup("NAVMESH_WINDING").map(|s| parse_winding(&s)).transpose()?;
        let funnel_epsilon = lookup("NAVMESH_FUNNEL_EPSILON")
            .map(|s| s.trim().parse::<f64>().with_context(|| format!("NAVMESH_FUNNEL_EPSILON={s:?} is not a number")))
            .transpose()?;

        Ok(Self { log_json, winding, funnel_epsilon })
    }
}

fn parse_winding(s: &str) -> anyhow::Result<Winding> {
    match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "y_up" => Ok(Winding::YUp),
        "y_down" => Ok(Winding::YDown),
        other => bail!("NAVMESH_WINDING={other:?}: expected y_up or y_down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("NAVMESH_LOG_JSON", "true"),
            ("NAVMESH_WINDING", "y-down"),
            ("NAVMESH_FUNNEL_EPSILON", "0.01"),
        ]))
        .unwrap();
        assert!(cfg.log_json);
        assert_eq!(cfg.winding, Some(Winding::YDown));
        assert_eq!(cfg.funnel_epsilon, Some(0.01));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Config::from_lookup(lookup(&[("NAVMESH_WINDING", "sideways")])).is_err());
        assert!(Config::from_lookup(lookup(&[("NAVMESH_FUNNEL_EPSILON", "tiny")])).is_err());
    }
}
