//! Built-in JOS-3 output parameters
//!
//! [OUTPUT_PARAMETERS] lists every quantity the JOS-3 model reports, in the order the
//! model documents them. [ALL_OUT_PARAMS] is the process-wide registry built from that
//! table on first access and never modified afterwards.
//!
//! The data is kept as published, including the swapped meanings of `t_core_set` and
//! `t_skin_set` and the mixed `Q_`/`q_` prefixes.

use super::descriptor::ParameterDescriptor;
use super::registry::ParameterRegistry;
use once_cell::sync::Lazy;

/// Suffix convention of values produced once per body segment
pub const BODY_NAME: Option<&str> = Some("Body name");

const EXTRA: bool = true;
const STANDARD: bool = false;

/// Catalogue table, in documentation order
pub const OUTPUT_PARAMETERS: &[ParameterDescriptor] = &[
    ParameterDescriptor::new("age", "age", "years", None, EXTRA),
    ParameterDescriptor::new("bf_ava_foot", "AVA blood flow rate of one foot", "L/h", None, EXTRA),
    ParameterDescriptor::new("bf_ava_hand", "AVA blood flow rate of one hand", "L/h", None, EXTRA),
    ParameterDescriptor::new(
        "bf_core",
        "core blood flow rate (each body part)",
        "L/h",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "bf_fat",
        "fat blood flow rate (each body part)",
        "L/h",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "bf_muscle",
        "muscle blood flow rate (each body part)",
        "L/h",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "bf_skin",
        "skin blood flow rate (each body part)",
        "L/h",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("bsa", "body surface area (each body part)", "m2", BODY_NAME, EXTRA),
    ParameterDescriptor::new(
        "cardiac_output",
        "cardiac output (the sum of the whole blood flow)",
        "L/h",
        None,
        STANDARD,
    ),
    ParameterDescriptor::new(
        "cycle_time",
        "the counts of executing one cycle calculation",
        "-",
        None,
        STANDARD,
    ),
    ParameterDescriptor::new(
        "e_max",
        "maximum evaporative heat loss from the skin (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "e_skin",
        "evaporative heat loss from the skin (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "e_sweat",
        "evaporative heat loss from the skin by only sweating (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("fat", "body fat rate", "%", None, EXTRA),
    ParameterDescriptor::new("height", "body height", "m", None, EXTRA),
    ParameterDescriptor::new(
        "clo",
        "clothing insulation (each body part)",
        "clo",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "q_skin_latent",
        "latent heat loss from the skin (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_bmr_core",
        "core heat production by basal metabolism (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "met_base_fat",
        "fat heat production by basal metabolism (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_bmr_muscle",
        "muscle heat production by basal metabolism (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_bmr_skin",
        "skin heat production by basal metabolism (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_total",
        "total heat production of the whole body",
        "W",
        None,
        STANDARD,
    ),
    ParameterDescriptor::new(
        "Q_nst",
        "core heat production by non-shivering thermogenesis (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("simulation_time", "simulation times", "sec", None, STANDARD),
    ParameterDescriptor::new(
        "Q_shiv",
        "core or muscle heat production by shivering thermogenesis (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_work",
        "core or muscle heat production by work (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("name", "name of the model", "-", None, EXTRA),
    ParameterDescriptor::new("par", "physical activity ratio", "-", None, EXTRA),
    ParameterDescriptor::new(
        "Q_core",
        "core total heat production (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_fat",
        "fat total heat production (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_muscle",
        "muscle total heat production (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Q_skin",
        "skin total heat production (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("q_res", "heat loss by respiration", "W", None, STANDARD),
    ParameterDescriptor::new(
        "q_res_latent",
        "latent heat loss by respiration (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "q_res_sensible",
        "sensible heat loss by respiration (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("rh", "relative humidity (each body part)", "%", BODY_NAME, EXTRA),
    ParameterDescriptor::new(
        "Ret",
        "total clothing evaporative heat resistance (each body part)",
        "m2.kPa/W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "Rt",
        "total clothing heat resistance (each body part)",
        "m2.K/W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "q_skin_sensible",
        "sensible heat loss from the skin (each body part)",
        "W",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "t_core_set",
        "skin set point temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "t_skin_set",
        "core set point temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("sex", "sex", "-", None, EXTRA),
    ParameterDescriptor::new(
        "q_skin",
        "total heat loss from the skin (each body part)",
        "W",
        BODY_NAME,
        STANDARD,
    ),
    ParameterDescriptor::new(
        "tdb",
        "dry bulb air temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "t_artery",
        "arterial temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("t_cb", "central blood temperature", "oC", None, EXTRA),
    ParameterDescriptor::new(
        "t_core",
        "core temperature (each body part)",
        "oC",
        BODY_NAME,
        STANDARD,
    ),
    ParameterDescriptor::new("t_fat", "fat temperature (each body part)", "oC", BODY_NAME, EXTRA),
    ParameterDescriptor::new(
        "t_muscle",
        "muscle temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "to",
        "operative temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "tr",
        "mean radiant temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new(
        "t_skin",
        "skin temperature (each body part)",
        "oC",
        BODY_NAME,
        STANDARD,
    ),
    ParameterDescriptor::new("t_skin_mean", "mean skin temperature", "oC", None, STANDARD),
    ParameterDescriptor::new(
        "t_superficial_vein",
        "superficial vein temperature (each body part)",
        "oC",
        BODY_NAME,
        EXTRA,
    ),
    ParameterDescriptor::new("t_vein", "vein temperature (each body part)", "oC", BODY_NAME, EXTRA),
    ParameterDescriptor::new("v", "air velocity (each body part)", "m/s", BODY_NAME, EXTRA),
    ParameterDescriptor::new("weight", "body weight", "kg", None, EXTRA),
    ParameterDescriptor::new("w", "skin wettedness (each body part)", "-", BODY_NAME, STANDARD),
    ParameterDescriptor::new("w_mean", "mean skin wettedness", "-", None, STANDARD),
    ParameterDescriptor::new(
        "weight_loss_by_evap_and_res",
        "weight loss by the evaporation and respiration of the whole body",
        "g/sec",
        None,
        STANDARD,
    ),
    ParameterDescriptor::new("dt", "time step", "sec", None, STANDARD),
    ParameterDescriptor::new(
        "pythermalcomfort_version",
        "version of pythermalcomfort",
        "-",
        None,
        STANDARD,
    ),
];

/// Shared registry of all output parameters
pub static ALL_OUT_PARAMS: Lazy<ParameterRegistry> = Lazy::new(|| {
    let registry = ParameterRegistry::from_static(OUTPUT_PARAMETERS);
    tracing::debug!(parameters = registry.len(), "output parameter registry built");
    registry
});
