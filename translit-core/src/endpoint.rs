//! Host command routing
//!
//! An end point binds a command key to a mode and a shared converter. The
//! host builds its menus and shortcuts from these and routes each invoked
//! command to the matching core entry point: batch conversion for
//! [`Mode::Batch`], session toggling for [`Mode::Map`] / [`Mode::MapAll`].

use std::sync::Arc;

use crate::engine::Converter;
use crate::types::{Direction, Layout, Mode};

#[derive(Debug, Clone)]
pub struct EndPoint {
    pub command_key: String,
    pub label: String,
    pub mode: Mode,
    pub converter: Arc<Converter>,
}

impl EndPoint {
    pub fn new(
        command_key: impl Into<String>,
        label: impl Into<String>,
        mode: Mode,
        converter: Arc<Converter>,
    ) -> Self {
        Self {
            command_key: command_key.into(),
            label: label.into(),
            mode,
            converter,
        }
    }
}

/// The standard command set for one layout: batch conversion both ways plus
/// the two incremental toggles, all sharing two converter instances.
pub fn standard_end_points(layout: &Layout) -> Vec<EndPoint> {
    let forward = Arc::new(Converter::new(layout, Direction::Forward));
    let reverse = Arc::new(Converter::new(layout, Direction::Reverse));

    vec![
        EndPoint::new(
            "cmd_fromtranslit",
            format!("Convert selection ({})", layout.description),
            Mode::Batch,
            Arc::clone(&forward),
        ),
        EndPoint::new(
            "cmd_totranslit",
            format!("Convert selection back ({})", layout.description),
            Mode::Batch,
            reverse,
        ),
        EndPoint::new(
            "cmd_togglemode",
            format!("Toggle input mapping ({})", layout.description),
            Mode::Map,
            Arc::clone(&forward),
        ),
        EndPoint::new(
            "cmd_togglemodeall",
            format!("Toggle input mapping everywhere ({})", layout.description),
            Mode::MapAll,
            forward,
        ),
    ]
}
