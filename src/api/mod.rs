pub mod cross_point;
mod crosshair_config;
pub mod crosshair_geometry;
mod crosshair_guide;
mod crosshair_operator;
mod guide_engine;

pub use crosshair_config::{
    CROSSHAIR_CONFIG_JSON_SCHEMA_V1, CrosshairConfigJsonContractV1, CrosshairGuideConfig,
};
pub use crosshair_guide::{CrosshairGuide, GuideFrameState};
pub use crosshair_operator::{CrosshairInput, CrosshairOperator, CrosshairParams};
pub use guide_engine::{GuideEngine, GuideId};
